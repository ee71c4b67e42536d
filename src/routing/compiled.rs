use crate::error::{RouteError, RouteResult};

use super::cache::{self, PatternCache};
use super::params::{Param, Params};
use super::MatchResult;

/// Regex path pattern with one capturing group per param
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    params: Vec<Param>,
}

impl CompiledPattern {
    pub fn new(source: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        CompiledPattern {
            source: source.into(),
            params: params.into_iter().collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Compile once outside the cache to check syntax and group count
    pub fn validate(&self) -> RouteResult<()> {
        let regex = cache::compile(&self.source)?;
        let slots = regex.captures_len() - 1;
        if slots != self.params.len() {
            return Err(RouteError::ParamCountMismatch {
                pattern: self.source.clone(),
                slots,
                declared: self.params.len(),
            });
        }
        Ok(())
    }

    pub fn match_path(&self, path: &str, cache: &PatternCache) -> RouteResult<MatchResult> {
        let ends_with_slash = path.ends_with('/');
        let regex = cache.get_or_compile(&self.source)?;

        let Some(captures) = regex.captures(path) else {
            return Ok(MatchResult::no_match(ends_with_slash));
        };

        let mut params = Params::with_capacity(self.params.len());
        for (i, slot) in self.params.iter().enumerate() {
            let raw = captures.get(i + 1).map_or("", |m| m.as_str());
            let Some((name, value)) = slot.bind(raw) else {
                return Ok(MatchResult::no_match(ends_with_slash));
            };
            params.push(name, value);
        }
        Ok(MatchResult::matched(params, ends_with_slash))
    }
}
