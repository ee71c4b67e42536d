//! A small HTTP request router.
//!
//! Routes are declared once as an ordered table of patterns, allowed methods
//! and handlers. Each request is matched top to bottom: the first route whose
//! pattern fits the path wins, then its method set decides between a match
//! and a method-not-allowed outcome.
//!
//! Two pattern syntaxes are supported:
//!
//! - segment patterns, where a whole `+` segment captures one path segment
//!   (`/api/widgets/+/parts/+/update`)
//! - regex patterns with one capturing group per param
//!   (`/api/widgets/([^/]+)/parts/([0-9]+)/update`), compiled on first use and
//!   cached per router

#[macro_use]
pub mod macros;

pub mod error;
pub mod http;
pub mod routing;

pub use error::{RouteError, RouteResult};
pub use routing::router::{MatchStrategy, RouteOutcome, Router, RouterBuilder};
