//! Forwarding of pass-through requests to the origin.
//!
//! # Responsibilities
//! - Rewrite scheme and authority to point at the origin
//! - Keep method, headers (Host included) and body as received
//! - Map upstream failures to 502 Bad Gateway
//!
//! # Design Decisions
//! - Requests go upstream as HTTP/1.1 regardless of the client's version
//! - Streaming bodies in both directions; nothing is buffered

use std::str::FromStr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{
        uri::{Authority, InvalidUri, PathAndQuery, Scheme},
        Request, StatusCode, Uri, Version,
    },
    response::{IntoResponse, Response},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::config::EdgeConfig;
use crate::http::request::request_id;

/// Pooled HTTP client bound to a single origin.
#[derive(Clone, Debug)]
pub struct Origin {
    client: Client<HttpConnector, Body>,
    authority: Authority,
}

impl Origin {
    /// Create a client for the configured origin.
    pub fn from_config(config: &EdgeConfig) -> Result<Self, InvalidUri> {
        let authority = Authority::from_str(config.origin.address.trim())?;

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self { client, authority })
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Point the request URI at the origin, keeping path and query.
    pub fn upstream_uri(&self, uri: &Uri) -> Result<Uri, axum::http::Error> {
        let path_and_query = uri
            .path_and_query()
            .cloned()
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Uri::builder()
            .scheme(Scheme::HTTP)
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()
    }

    /// Send the request to the origin and stream the response back.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let request_id = request_id(&request).to_string();
        let (mut parts, body) = request.into_parts();

        parts.uri = match self.upstream_uri(&parts.uri) {
            Ok(uri) => uri,
            Err(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Failed to build origin URI");
                return (StatusCode::BAD_GATEWAY, "Invalid origin request").into_response();
            }
        };
        parts.version = Version::HTTP_11;

        tracing::debug!(
            request_id = %request_id,
            method = %parts.method,
            uri = %parts.uri,
            "Forwarding to origin"
        );

        match self.client.request(Request::from_parts(parts, body)).await {
            Ok(response) => {
                let (parts, body) = response.into_parts();
                Response::from_parts(parts, Body::new(body))
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    origin = %self.authority,
                    error = %e,
                    "Upstream error"
                );
                (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
            }
        }
    }
}
