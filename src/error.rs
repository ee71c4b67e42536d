use std::fmt;

/// Route table configuration errors, raised while building a router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Wildcard slots or capture groups do not line up with declared params
    ParamCountMismatch {
        pattern: String,
        slots: usize,
        declared: usize,
    },
    /// Pattern text could not be compiled
    InvalidPattern {
        pattern: String,
        reason: String,
    },
    /// Route declared without any allowed method
    NoMethods {
        pattern: String,
    },
    /// Two params of one route share a name
    DuplicateParam {
        pattern: String,
        name: String,
    },
}

impl RouteError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl fmt::Display) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Pattern text the error was raised for
    pub fn pattern(&self) -> &str {
        match self {
            RouteError::ParamCountMismatch { pattern, .. }
            | RouteError::InvalidPattern { pattern, .. }
            | RouteError::NoMethods { pattern }
            | RouteError::DuplicateParam { pattern, .. } => pattern,
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::ParamCountMismatch { pattern, slots, declared } => {
                write!(
                    f,
                    "Pattern '{}' has {} parameter slots but {} params were declared",
                    pattern, slots, declared
                )
            }
            RouteError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid pattern '{}': {}", pattern, reason)
            }
            RouteError::NoMethods { pattern } => {
                write!(f, "Route '{}' allows no methods", pattern)
            }
            RouteError::DuplicateParam { pattern, name } => {
                write!(f, "Route '{}' declares param '{}' more than once", pattern, name)
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Result type alias for route table operations
pub type RouteResult<T> = Result<T, RouteError>;
