use crate::error::{RouteError, RouteResult};

use super::params::{Param, ParamType, Params};
use super::MatchResult;

/// A pattern segment that captures one path segment
pub const WILDCARD: &str = "+";

/// Path pattern with `+` wildcard segments, matched without precompilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPattern {
    text: String,
    params: Vec<Param>,
}

impl SegmentPattern {
    pub fn new(text: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        SegmentPattern {
            text: text.into(),
            params: params.into_iter().collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn wildcard_count(&self) -> usize {
        self.text.split('/').filter(|seg| *seg == WILDCARD).count()
    }

    pub fn validate(&self) -> RouteResult<()> {
        let slots = self.wildcard_count();
        if slots != self.params.len() {
            return Err(RouteError::ParamCountMismatch {
                pattern: self.text.clone(),
                slots,
                declared: self.params.len(),
            });
        }
        Ok(())
    }

    /// Walk `path` and the pattern segment by segment, binding wildcards
    pub fn match_path(&self, path: &str) -> MatchResult {
        let ends_with_slash = path.ends_with('/');
        if ends_with_slash != self.text.ends_with('/') {
            return MatchResult::no_match(ends_with_slash);
        }

        let mut path_segments = path.split('/');
        let mut pattern_segments = self.text.split('/');
        let mut slots = self.params.iter();
        let mut params = Params::with_capacity(self.params.len());

        loop {
            match (path_segments.next(), pattern_segments.next()) {
                (None, None) => return MatchResult::matched(params, ends_with_slash),
                (Some(segment), Some(WILDCARD)) => {
                    // a trailing wildcard never captures an empty tail
                    if segment.is_empty() && pattern_segments.clone().next().is_none() {
                        return MatchResult::no_match(ends_with_slash);
                    }
                    let Some((name, value)) = slots.next().and_then(|slot| slot.bind(segment)) else {
                        return MatchResult::no_match(ends_with_slash);
                    };
                    params.push(name, value);
                }
                (Some(segment), Some(literal)) if segment == literal => {}
                _ => return MatchResult::no_match(ends_with_slash),
            }
        }
    }

    /// Equivalent regex source for the compiled matcher
    pub fn to_regex(&self) -> String {
        let mut slots = self.params.iter();
        let last = self.text.split('/').count() - 1;
        self.text
            .split('/')
            .enumerate()
            .map(|(i, segment)| {
                if segment != WILDCARD {
                    return regex::escape(segment);
                }
                match slots.next().map(|slot| slot.ty) {
                    Some(ParamType::UInt) => "([0-9]+)".to_string(),
                    _ if i == last => "([^/]+)".to_string(),
                    _ => "([^/]*)".to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
