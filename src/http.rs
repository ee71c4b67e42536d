use crate::routing::params::Params;

use self::method::Method;

pub mod handler;
pub mod headers;
pub mod http_status;
pub mod method;
pub mod response;
pub mod response_builder;

/// What a handler sees of a routed request
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Request {
    pub path: String,
    pub method: Method,
    pub params: Params,
}

impl Request {
    pub fn create(path: &str, method: Method, params: Params) -> Request {
        Request {
            path: path.to_string(),
            method,
            params,
        }
    }
}
