use std::collections::HashMap;
use std::fmt;

/// Response headers with case-insensitive keys as per RFC 7230
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    // lowercase key -> (original key, value)
    inner: HashMap<String, (String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Headers {
            inner: HashMap::new(),
        }
    }

    /// Insert a header, replacing any value stored under the same key
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) {
        self.inner.insert(
            key.as_ref().to_lowercase(),
            (key.as_ref().to_string(), value.as_ref().to_string()),
        );
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.inner
            .get(&key.as_ref().to_lowercase())
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.inner.contains_key(&key.as_ref().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over headers with preserved case
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .values()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (original_key, value) in self.inner.values() {
            writeln!(f, "{}: {}", original_key, value)?;
        }
        Ok(())
    }
}
