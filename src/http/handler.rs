use crate::http::response::Response;
use crate::http::Request;
use log::{debug, error};
use std::fmt;

use super::response_builder::ResponseBuilder;

/// A named request handler
#[derive(Clone)]
pub struct Handler {
    name: String,
    pub(crate) handler_func: fn(&Request) -> Result<Response, String>,
}

impl Handler {
    pub fn new(name: &str, handler_func: fn(&Request) -> Result<Response, String>) -> Handler {
        Handler {
            name: name.to_string(),
            handler_func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the handler, mapping a handler error to a 500 response
    pub fn handle(&self, request: &Request) -> Response {
        match (self.handler_func)(request) {
            Ok(response) => {
                debug!(
                    "Handler '{}' served {} {} with {}",
                    self.name, request.method, request.path, response.status_code
                );
                response
            }
            Err(e) => {
                error!(
                    "Handler '{}' failed for {} {}: {}",
                    self.name, request.method, request.path, e
                );
                ResponseBuilder::internal_error()
                    .body(format!("Internal Server Error: {}", e))
                    .build()
            }
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Handler {}
