use crate::http::headers::Headers;
use crate::http::http_status::HttpStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status_code: u16,
    pub headers: Headers,
    pub response_body: String,
}

impl Response {
    pub fn create(status_code: u16, response_body: String) -> Response {
        Response {
            status_code,
            headers: Headers::new(),
            response_body,
        }
    }

    pub fn get_status_line(&self) -> String {
        let status_msg = HttpStatus::get_status_msg(self.status_code);
        format!(
            "HTTP/1.1 {status_code} {status_msg}",
            status_code = self.status_code
        )
    }

    /// Serialize as an HTTP/1.1 response with a `Content-Length` header
    pub fn to_http_string(&self) -> String {
        let status_line = self.get_status_line();
        let length = self.response_body.len();
        let contents = &self.response_body;
        let headers: String = self
            .headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case("content-length"))
            .map(|(k, v)| format!("{k}: {v}\r\n"))
            .collect();

        format!("{status_line}\r\n{headers}Content-Length: {length}\r\n\r\n{contents}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_string() {
        let mut response = Response::create(405, "405 method not allowed".to_string());
        response.headers.insert("Allow", "POST");

        assert_eq!(
            response.to_http_string(),
            "HTTP/1.1 405 Method Not Allowed\r\nAllow: POST\r\nContent-Length: 22\r\n\r\n405 method not allowed"
        );
    }
}
