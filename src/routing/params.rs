use serde::ser::{Serialize, SerializeMap, Serializer};

/// Destination type of a param slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Str,
    /// Non-negative decimal integer
    UInt,
}

impl ParamType {
    /// Convert captured text into this type, `None` when it does not fit
    pub fn bind(self, raw: &str) -> Option<ParamValue> {
        match self {
            ParamType::Str => Some(ParamValue::Str(raw.to_string())),
            ParamType::UInt => {
                // `u64::from_str` accepts a leading '+', digits only here
                if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                raw.parse::<u64>().ok().map(ParamValue::UInt)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    UInt(u64),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            ParamValue::UInt(_) => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ParamValue::UInt(n) => Some(*n),
            ParamValue::Str(_) => None,
        }
    }
}

/// A named, typed destination for one captured segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: ParamType,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Param { name: name.into(), ty }
    }

    pub fn str(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::Str)
    }

    pub fn uint(name: impl Into<String>) -> Self {
        Self::new(name, ParamType::UInt)
    }

    pub(crate) fn bind(&self, raw: &str) -> Option<(String, ParamValue)> {
        self.ty.bind(raw).map(|value| (self.name.clone(), value))
    }
}

/// Bound path params, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Params {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: ParamValue) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn get_index(&self, index: usize) -> Option<&ParamValue> {
        self.entries.get(index).map(|(_, value)| value)
    }

    /// String param by name, `None` when absent or not a string
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Integer param by name, `None` when absent or not an integer
    pub fn uint(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(ParamValue::as_uint)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
