//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, extract host and path-and-query)
//!     → redirect.rs (normalizer: 301 for www. hosts)
//!     → origin.rs (forward everything else to the origin)
//!     → Send to client
//! ```

pub mod origin;
pub mod redirect;
pub mod request;
pub mod server;

pub use origin::Origin;
pub use redirect::www_redirect;
pub use request::{HostError, UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
