//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the origin handler
//! - Wire up middleware (request ID, tracing, timeout, body limit, redirect)
//! - Bind server to listener
//! - Graceful shutdown on the lifecycle broadcast

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{uri::InvalidUri, Request},
    middleware,
    response::Response,
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::EdgeConfig;
use crate::http::origin::Origin;
use crate::http::redirect::www_redirect;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::lifecycle::shutdown;

/// Errors from building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid origin address: {0}")]
    InvalidOrigin(#[from] InvalidUri),

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub origin: Origin,
}

/// HTTP server for the edge node.
pub struct HttpServer {
    router: Router,
    config: EdgeConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EdgeConfig) -> Result<Self, ServerError> {
        let state = AppState {
            origin: Origin::from_config(&config)?,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Outermost first: request ID, trace span, ID propagation, timeout,
    /// `www.` redirect, body limit, origin. The limit only guards forwarding.
    #[allow(deprecated)]
    fn build_router(config: &EdgeConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(origin_handler))
            .route("/", any(origin_handler))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(middleware::from_fn(www_redirect))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(req),
                    method = %req.method(),
                    uri = %req.uri(),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            origin = %self.config.origin.address,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Pass-through handler: everything the redirect let through goes to the origin.
async fn origin_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    state.origin.forward(request).await
}
