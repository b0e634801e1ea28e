//! Request and response value types for the normalizer.

use std::collections::BTreeMap;

use axum::http::StatusCode;

/// Name of the only header a redirect carries.
pub const LOCATION: &str = "location";

/// The inbound request as seen by the edge handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRequest {
    host: String,
    uri: String,
}

impl EdgeRequest {
    /// Create a request from a Host header value and a path-plus-query.
    pub fn new(host: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            uri: uri.into(),
        }
    }

    /// The HTTP Host header value.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path plus query, already percent-encoded.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// A freshly built redirect response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResponse {
    status_code: StatusCode,
    status_description: String,
    headers: BTreeMap<String, String>,
}

impl RedirectResponse {
    /// Build a `301 Moved Permanently` pointing at `location`.
    pub fn moved_permanently(location: impl Into<String>) -> Self {
        let status_code = StatusCode::MOVED_PERMANENTLY;
        let mut headers = BTreeMap::new();
        headers.insert(LOCATION.to_string(), location.into());

        Self {
            status_code,
            status_description: status_code
                .canonical_reason()
                .unwrap_or("Moved Permanently")
                .to_string(),
            headers,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn status_description(&self) -> &str {
        &self.status_description
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The redirect target.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).map(String::as_str)
    }
}

/// Result of running the normalizer: `Request | Response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Host is already normalized; the request is handed back unchanged.
    Forward(EdgeRequest),
    /// Host carried the prefix; answer with a redirect instead.
    Redirect(RedirectResponse),
}

impl Outcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_permanently_shape() {
        let response = RedirectResponse::moved_permanently("https://example.com/");

        assert_eq!(response.status_code(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.status_code().as_u16(), 301);
        assert_eq!(response.status_description(), "Moved Permanently");
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.location(), Some("https://example.com/"));
    }
}
