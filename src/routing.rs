use log::error;

use self::cache::PatternCache;
use self::compiled::CompiledPattern;
use self::params::{Param, Params};
use self::segment::SegmentPattern;
use crate::error::RouteResult;

pub mod cache;
pub mod compiled;
pub mod params;
pub mod route;
pub mod router;
pub mod segment;

/// Outcome of matching one path against one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub ends_with_slash: bool,
    pub params: Params,
}

impl MatchResult {
    pub fn matched(params: Params, ends_with_slash: bool) -> Self {
        MatchResult {
            matched: true,
            ends_with_slash,
            params,
        }
    }

    pub fn no_match(ends_with_slash: bool) -> Self {
        MatchResult {
            matched: false,
            ends_with_slash,
            params: Params::new(),
        }
    }

    pub fn into_params(self) -> Option<Params> {
        self.matched.then_some(self.params)
    }
}

/// A declared path pattern together with its param destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    Segment(SegmentPattern),
    Compiled(CompiledPattern),
}

impl PatternSpec {
    /// Pattern with whole-segment `+` wildcards, e.g. `/api/widgets/+`
    pub fn segment(text: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        PatternSpec::Segment(SegmentPattern::new(text, params))
    }

    /// Regex pattern, implicitly anchored, e.g. `/api/widgets/([^/]+)`
    pub fn regex(source: impl Into<String>, params: impl IntoIterator<Item = Param>) -> Self {
        PatternSpec::Compiled(CompiledPattern::new(source, params))
    }

    pub fn text(&self) -> &str {
        match self {
            PatternSpec::Segment(pattern) => pattern.text(),
            PatternSpec::Compiled(pattern) => pattern.source(),
        }
    }

    pub fn params(&self) -> &[Param] {
        match self {
            PatternSpec::Segment(pattern) => pattern.params(),
            PatternSpec::Compiled(pattern) => pattern.params(),
        }
    }

    pub fn validate(&self) -> RouteResult<()> {
        match self {
            PatternSpec::Segment(pattern) => pattern.validate(),
            PatternSpec::Compiled(pattern) => pattern.validate(),
        }
    }

    /// Same pattern expressed for the compiled matcher
    pub fn to_compiled(&self) -> PatternSpec {
        match self {
            PatternSpec::Segment(pattern) => {
                PatternSpec::regex(pattern.to_regex(), pattern.params().to_vec())
            }
            PatternSpec::Compiled(_) => self.clone(),
        }
    }

    pub fn match_path(&self, path: &str, cache: &PatternCache) -> MatchResult {
        match self {
            PatternSpec::Segment(pattern) => pattern.match_path(path),
            PatternSpec::Compiled(pattern) => pattern.match_path(path, cache).unwrap_or_else(|e| {
                // unreachable for validated routes
                error!("Could not match '{path}': {e}");
                MatchResult::no_match(path.ends_with('/'))
            }),
        }
    }
}
