//! Request handling at the HTTP boundary.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract the normalizer input (host, path-and-query)
//! - Reject requests with no usable host
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The request-target authority wins over Host (RFC 9112 §3.2.2);
//!   origin-form requests use the Host header
//! - The request itself is never modified here

use axum::http::{header::HOST, HeaderName, HeaderValue, Request};
use thiserror::Error;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::normalizer::EdgeRequest;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Why a request could not be turned into an `EdgeRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Request has no host")]
    Missing,

    #[error("Host header is not valid visible ASCII")]
    Invalid,
}

/// Generates `x-request-id` values as UUID v4 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The request ID set by `SetRequestIdLayer`, or "unknown".
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Host of the request: the URI authority when present (absolute-form,
/// HTTP/2 `:authority`), otherwise the Host header.
pub fn host_of<B>(request: &Request<B>) -> Result<&str, HostError> {
    let host = match request.uri().authority() {
        Some(authority) => authority.as_str(),
        None => request
            .headers()
            .get(HOST)
            .ok_or(HostError::Missing)?
            .to_str()
            .map_err(|_| HostError::Invalid)?,
    };

    if host.is_empty() {
        return Err(HostError::Missing);
    }
    Ok(host)
}

/// Path plus query as sent by the client; "/" when the target has none.
pub fn path_and_query<B>(request: &Request<B>) -> &str {
    request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
}

/// Build the normalizer input from an HTTP request.
pub fn to_edge_request<B>(request: &Request<B>) -> Result<EdgeRequest, HostError> {
    let host = host_of(request)?;
    Ok(EdgeRequest::new(host, path_and_query(request)))
}
