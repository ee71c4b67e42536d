use super::headers::Headers;
use super::response::Response;

/// Immutable HTTP response builder using functional patterns
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status_code: u16,
    headers: Headers,
    body: Option<String>,
}

impl ResponseBuilder {
    pub fn new(status_code: u16) -> Self {
        ResponseBuilder {
            status_code,
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(200)
    }

    /// 404 with the standard body for `path`
    pub fn not_found(path: &str) -> Self {
        Self::new(404).body(format!("Resource: {path} not found."))
    }

    /// 405 carrying the `Allow` header
    pub fn method_not_allowed(allow: impl AsRef<str>) -> Self {
        Self::new(405)
            .header("Allow", allow)
            .body("405 method not allowed")
    }

    pub fn internal_error() -> Self {
        Self::new(500)
    }

    /// Add a header (returns a new builder)
    pub fn header(self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let mut headers = self.headers;
        headers.insert(key, value);
        ResponseBuilder { headers, ..self }
    }

    pub fn body(self, body: impl Into<String>) -> Self {
        ResponseBuilder {
            body: Some(body.into()),
            ..self
        }
    }

    /// Set JSON body with appropriate content-type header
    pub fn json<T: serde::Serialize>(self, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(json) => self
                .header("Content-Type", "application/json")
                .body(json),
            Err(e) => self
                .status(500)
                .body(format!("JSON serialization error: {}", e)),
        }
    }

    pub fn status(self, status_code: u16) -> Self {
        ResponseBuilder { status_code, ..self }
    }

    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            headers: self.headers,
            response_body: self.body.unwrap_or_default(),
        }
    }
}
