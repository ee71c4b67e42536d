mod common;

use std::sync::Arc;
use std::thread;

use nvo_router::{MatchStrategy, RouteOutcome, Router};

use common::{init_logging, widget_routes};

fn compiled_router() -> Router<nvo_router::http::handler::Handler> {
    Router::builder()
        .with_strategy(MatchStrategy::Compiled)
        .with_routes(widget_routes())
        .build()
        .unwrap()
}

#[test]
fn cache_is_filled_lazily() {
    init_logging();
    let router = compiled_router();
    assert!(router.cache().is_empty());

    // "/" is the first route, nothing past it is compiled
    router.route("GET", "/");
    assert_eq!(router.cache().len(), 1);
    assert!(router.cache().contains("/"));
}

#[test]
fn repeated_match_converges() {
    init_logging();
    let router = compiled_router();
    let path = "/api/widgets/abc/parts/42/update";

    let first = router.route("POST", path);
    let size = router.cache().len();
    let second = router.route("POST", path);

    assert_eq!(first, second);
    assert_eq!(router.cache().len(), size);
    assert_eq!(router.cache().compilations(), size);
    assert!(router.cache().contains("/api/widgets/([^/]*)/parts/([0-9]+)/update"));
}

#[test]
fn each_router_owns_its_cache() {
    init_logging();
    let warm = compiled_router();
    warm.route("GET", "/unknownpath/x/y");
    assert_eq!(warm.cache().len(), warm.routes().len());

    let fresh = compiled_router();
    assert!(fresh.cache().is_empty());
}

#[test]
fn concurrent_first_use_compiles_once() {
    init_logging();
    let router = Arc::new(compiled_router());
    let routes = router.routes().len();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let router = router.clone();
            thread::spawn(move || {
                // every path falls through the whole table on a miss
                for _ in 0..50 {
                    assert_eq!(router.route("GET", "/unknownpath/x/y"), RouteOutcome::NotFound);
                }
                let path = format!("/api/widgets/w{i}/parts/{i}/update");
                match router.route("POST", &path) {
                    RouteOutcome::Matched { params, .. } => params.uint("id"),
                    _ => None,
                }
            })
        })
        .collect();

    let ids: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(ids, (0..8).map(Some).collect::<Vec<_>>());
    assert_eq!(router.cache().len(), routes);
    assert_eq!(router.cache().compilations(), routes);
}
