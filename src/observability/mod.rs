//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Adapters (http, event CLI) produce:
//!     → logging.rs (structured log events via tracing)
//!     → request spans from tower-http TraceLayer, tagged with x-request-id
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - The normalizer itself never logs; adapters log its outcome

pub mod logging;

pub use logging::init_logging;
