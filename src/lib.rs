//! Edge host normalizer: redirects `www.` hosts to their bare domain.

// Core transform
pub mod normalizer;

// Boundary adapters
pub mod event;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::EdgeConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use normalizer::{normalize_host, EdgeRequest, Outcome, RedirectResponse};
