//! `www.` redirect middleware.
//! Answers `www.` hosts with a 301 before the request reaches the origin.

use axum::{
    body::Body,
    http::{header::LOCATION, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use crate::http::request::{request_id, to_edge_request};
use crate::normalizer::{normalize_host, Outcome, RedirectResponse};

pub async fn www_redirect(req: Request<Body>, next: Next) -> Response {
    let edge_request = match to_edge_request(&req) {
        Ok(edge_request) => edge_request,
        Err(e) => {
            warn!(request_id = %request_id(&req), error = %e, "Rejecting request");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    match normalize_host(edge_request) {
        Outcome::Redirect(redirect) => {
            debug!(
                request_id = %request_id(&req),
                location = redirect.location().unwrap_or_default(),
                "Redirecting to bare host"
            );
            into_http_response(&redirect)
        }
        // The original request goes on, not the normalizer's copy.
        Outcome::Forward(_) => next.run(req).await,
    }
}

/// Render a redirect as an HTTP response with an empty body.
pub fn into_http_response(redirect: &RedirectResponse) -> Response {
    let mut builder = Response::builder().status(redirect.status_code());
    if let Some(location) = redirect.location() {
        builder = builder.header(LOCATION, location);
    }

    match builder.body(Body::empty()) {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
