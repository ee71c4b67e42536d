use std::collections::HashSet;

use log::{debug, info, trace, warn};

use crate::error::{RouteError, RouteResult};
use crate::http::handler::Handler;
use crate::http::method::{allow_header, Method};
use crate::http::response::Response;
use crate::http::response_builder::ResponseBuilder;
use crate::http::Request;

use super::cache::PatternCache;
use super::params::Params;
use super::route::Route;

/// Which matcher segment patterns run on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Walk `+` patterns segment by segment, no compilation
    #[default]
    Segment,
    /// Translate `+` patterns to regexes, compiled and cached on first use
    Compiled,
}

/// Terminal result of routing one request
#[derive(Debug, PartialEq, Eq)]
pub enum RouteOutcome<'a, H> {
    Matched { handler: &'a H, params: Params },
    /// Path matched a route that does not accept the method
    MethodNotAllowed { allowed: &'a [Method] },
    NotFound,
}

pub struct RouterBuilder<H> {
    routes: Vec<Route<H>>,
    strategy: MatchStrategy,
}

impl<H> RouterBuilder<H> {
    pub fn new() -> RouterBuilder<H> {
        Self {
            routes: Vec::new(),
            strategy: MatchStrategy::default(),
        }
    }

    /// Append a route, after every route added so far
    pub fn with_route(self, route: Route<H>) -> Self {
        let mut routes = self.routes;
        routes.push(route);
        Self { routes, ..self }
    }

    pub fn with_routes(self, new_routes: impl IntoIterator<Item = Route<H>>) -> Self {
        let routes = self.routes.into_iter().chain(new_routes).collect();
        Self { routes, ..self }
    }

    pub fn with_strategy(self, strategy: MatchStrategy) -> Self {
        Self { strategy, ..self }
    }

    /// Validate the table, failing on the first misconfigured route
    pub fn build(self) -> RouteResult<Router<H>> {
        let strategy = self.strategy;
        let routes = self
            .routes
            .into_iter()
            .map(|mut route| {
                if strategy == MatchStrategy::Compiled {
                    route.pattern = route.pattern.to_compiled();
                }
                route.dedup_methods();
                match validate(&route) {
                    Ok(()) => Ok(route),
                    Err(e) => log_and_err!(e),
                }
            })
            .collect::<RouteResult<Vec<_>>>()?;

        warn_shadowed(&routes);
        info!("Built router with {} routes using {:?} matching", routes.len(), strategy);

        Ok(Router {
            routes,
            cache: PatternCache::new(),
            strategy,
        })
    }
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

fn validate<H>(route: &Route<H>) -> RouteResult<()> {
    let pattern = route.pattern.text();
    if route.methods.is_empty() {
        return Err(RouteError::NoMethods {
            pattern: pattern.to_string(),
        });
    }

    let mut names = HashSet::new();
    if let Some(dup) = route.pattern.params().iter().find(|p| !names.insert(p.name.as_str())) {
        return Err(RouteError::DuplicateParam {
            pattern: pattern.to_string(),
            name: dup.name.clone(),
        });
    }

    route.pattern.validate()
}

// A repeated pattern can never be reached: the earlier route always wins.
fn warn_shadowed<H>(routes: &[Route<H>]) {
    let mut seen = HashSet::new();
    routes
        .iter()
        .map(|route| route.pattern.text())
        .filter(|text| !seen.insert(*text))
        .for_each(|text| warn!("Route '{text}' is shadowed by an earlier route with the same pattern"));
}

/// Ordered route table with its own compiled-pattern cache
#[derive(Debug)]
pub struct Router<H> {
    routes: Vec<Route<H>>,
    cache: PatternCache,
    strategy: MatchStrategy,
}

impl<H> Router<H> {
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// First route whose pattern fits `path` decides the outcome, the method
    /// is checked only against that route
    pub fn route(&self, method: &str, path: &str) -> RouteOutcome<'_, H> {
        let method = Method::from(method);
        let found = self.routes.iter().enumerate().find_map(|(i, route)| {
            let result = route.pattern.match_path(path, &self.cache);
            trace!(
                "Route #{i} '{}' vs '{path}': matched={}",
                route.pattern.text(),
                result.matched
            );
            result.into_params().map(|params| (route, params))
        });

        match found {
            None => {
                debug!("No route registered for path: '{path}' and method: {method}");
                RouteOutcome::NotFound
            }
            Some((route, params)) if route.allows(&method) => {
                debug!("Routed {method} '{path}' to '{}'", route.pattern.text());
                RouteOutcome::Matched {
                    handler: &route.handler,
                    params,
                }
            }
            Some((route, _)) => {
                debug!(
                    "Method {method} not allowed for '{path}', allowed: {}",
                    route.allow_header()
                );
                RouteOutcome::MethodNotAllowed {
                    allowed: route.allowed_methods(),
                }
            }
        }
    }

    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }
}

impl Router<Handler> {
    /// Route the request and run the handler, or answer 404/405
    pub fn serve(&self, method: &str, path: &str) -> Response {
        match self.route(method, path) {
            RouteOutcome::Matched { handler, params } => {
                handler.handle(&Request::create(path, Method::from(method), params))
            }
            RouteOutcome::MethodNotAllowed { allowed } => {
                ResponseBuilder::method_not_allowed(allow_header(allowed)).build()
            }
            RouteOutcome::NotFound => ResponseBuilder::not_found(path).build(),
        }
    }
}
