use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use log::debug;
use regex::Regex;

use crate::error::{RouteError, RouteResult};

/// Compiled regex per pattern text, populated on first use
///
/// Each router owns its own cache. Look-up, compilation and insertion of a
/// missing pattern run while holding the map entry, so a pattern is compiled
/// at most once even under concurrent first use. The entry guard is dropped
/// before the caller evaluates the regex.
#[derive(Debug, Default)]
pub struct PatternCache {
    compiled: DashMap<String, Arc<Regex>>,
    compilations: AtomicUsize,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&self, pattern: &str) -> RouteResult<Arc<Regex>> {
        if let Some(regex) = self.compiled.get(pattern) {
            return Ok(Arc::clone(regex.value()));
        }

        let entry = self
            .compiled
            .entry(pattern.to_string())
            .or_try_insert_with(|| {
                self.compilations.fetch_add(1, Ordering::SeqCst);
                debug!("Compiling pattern: '{pattern}'");
                compile(pattern).map(Arc::new)
            })?;
        Ok(Arc::clone(entry.value()))
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.compiled.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Number of compilations performed so far
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::SeqCst)
    }
}

/// Compile `pattern` anchored to the whole path
pub fn compile(pattern: &str) -> RouteResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| RouteError::invalid_pattern(pattern, e))
}
