use nvo_router::http::handler::Handler;
use nvo_router::http::method::Method;
use nvo_router::http::response::Response;
use nvo_router::http::Request;
use nvo_router::routing::params::Param;
use nvo_router::routing::route::Route;
use nvo_router::routing::PatternSpec;
use nvo_router::{MatchStrategy, Router};

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn text(body: String) -> Result<Response, String> {
    Ok(Response::create(200, body))
}

fn slug(req: &Request) -> &str {
    req.params.str("slug").unwrap_or_default()
}

fn id(req: &Request) -> u64 {
    req.params.uint("id").unwrap_or_default()
}

fn seg(text: &str, params: Vec<Param>) -> PatternSpec {
    PatternSpec::segment(text, params)
}

fn re(source: &str, params: Vec<Param>) -> PatternSpec {
    PatternSpec::regex(source, params)
}

fn home(_: &Request) -> Result<Response, String> {
    text("home\n".to_string())
}

fn contact(_: &Request) -> Result<Response, String> {
    text("contact\n".to_string())
}

fn api_widgets(req: &Request) -> Result<Response, String> {
    match req.method {
        Method::Post => text("apiCreateWidget\n".to_string()),
        _ => text("apiGetWidgets\n".to_string()),
    }
}

fn api_update_widget(req: &Request) -> Result<Response, String> {
    text(format!("apiUpdateWidget {}\n", slug(req)))
}

fn api_create_widget_part(req: &Request) -> Result<Response, String> {
    text(format!("apiCreateWidgetPart {}\n", slug(req)))
}

fn api_update_widget_part(req: &Request) -> Result<Response, String> {
    text(format!("apiUpdateWidgetPart {} {}\n", slug(req), id(req)))
}

fn api_delete_widget_part(req: &Request) -> Result<Response, String> {
    text(format!("apiDeleteWidgetPart {} {}\n", slug(req), id(req)))
}

fn widget(req: &Request) -> Result<Response, String> {
    text(format!("widget {}\n", slug(req)))
}

fn widget_admin(req: &Request) -> Result<Response, String> {
    text(format!("widgetAdmin {}\n", slug(req)))
}

fn widget_image(req: &Request) -> Result<Response, String> {
    text(format!("widgetImage {}\n", slug(req)))
}

/// The widget site, with `+` wildcard patterns
#[allow(dead_code)]
pub fn widget_routes() -> Vec<Route<Handler>> {
    let slug_param = || vec![Param::str("slug")];
    let part_params = || vec![Param::str("slug"), Param::uint("id")];

    vec![
        Route::get(seg("/", vec![]), Handler::new("home", home)),
        Route::get(seg("/contact", vec![]), Handler::new("contact", contact)),
        Route::new(
            seg("/api/widgets", vec![]),
            [Method::Get, Method::Post],
            Handler::new("apiWidgets", api_widgets),
        ),
        Route::post(seg("/api/widgets/+", slug_param()), Handler::new("apiUpdateWidget", api_update_widget)),
        Route::post(
            seg("/api/widgets/+/parts", slug_param()),
            Handler::new("apiCreateWidgetPart", api_create_widget_part),
        ),
        Route::post(
            seg("/api/widgets/+/parts/+/update", part_params()),
            Handler::new("apiUpdateWidgetPart", api_update_widget_part),
        ),
        Route::post(
            seg("/api/widgets/+/parts/+/delete", part_params()),
            Handler::new("apiDeleteWidgetPart", api_delete_widget_part),
        ),
        Route::get(seg("/+", slug_param()), Handler::new("widget", widget)),
        Route::get(seg("/+/admin", slug_param()), Handler::new("widgetAdmin", widget_admin)),
        Route::post(seg("/+/image", slug_param()), Handler::new("widgetImage", widget_image)),
    ]
}

/// The widget site, with hand-written regex patterns
#[allow(dead_code)]
pub fn widget_regex_routes() -> Vec<Route<Handler>> {
    let slug_param = || vec![Param::str("slug")];
    let part_params = || vec![Param::str("slug"), Param::uint("id")];

    vec![
        Route::get(re("/", vec![]), Handler::new("home", home)),
        Route::get(re("/contact", vec![]), Handler::new("contact", contact)),
        Route::new(
            re("/api/widgets", vec![]),
            [Method::Get, Method::Post],
            Handler::new("apiWidgets", api_widgets),
        ),
        Route::post(re("/api/widgets/([^/]+)", slug_param()), Handler::new("apiUpdateWidget", api_update_widget)),
        Route::post(
            re("/api/widgets/([^/]+)/parts", slug_param()),
            Handler::new("apiCreateWidgetPart", api_create_widget_part),
        ),
        Route::post(
            re("/api/widgets/([^/]+)/parts/([0-9]+)/update", part_params()),
            Handler::new("apiUpdateWidgetPart", api_update_widget_part),
        ),
        Route::post(
            re("/api/widgets/([^/]+)/parts/([0-9]+)/delete", part_params()),
            Handler::new("apiDeleteWidgetPart", api_delete_widget_part),
        ),
        Route::get(re("/([^/]+)", slug_param()), Handler::new("widget", widget)),
        Route::get(re("/([^/]+)/admin", slug_param()), Handler::new("widgetAdmin", widget_admin)),
        Route::post(re("/([^/]+)/image", slug_param()), Handler::new("widgetImage", widget_image)),
    ]
}

/// Every flavour of the widget site the router supports
#[allow(dead_code)]
pub fn widget_routers() -> Vec<(&'static str, Router<Handler>)> {
    let build = |routes: Vec<Route<Handler>>, strategy: MatchStrategy| {
        Router::builder()
            .with_strategy(strategy)
            .with_routes(routes)
            .build()
            .expect("widget routes are valid")
    };

    vec![
        ("segment", build(widget_routes(), MatchStrategy::Segment)),
        ("segment as regex", build(widget_routes(), MatchStrategy::Compiled)),
        ("regex", build(widget_regex_routes(), MatchStrategy::Segment)),
    ]
}
