//! Host normalization subsystem.
//!
//! # Data Flow
//! ```text
//! Adapter (HTTP middleware / viewer event)
//!     → types.rs (EdgeRequest built from validated input)
//!     → host.rs (prefix check, strip "www.")
//!     → Outcome::Redirect (301 + location) or Outcome::Forward (request untouched)
//!     → Adapter renders the outcome
//! ```
//!
//! # Design Decisions
//! - The transform is pure: no I/O, no logging, no configuration
//! - Field presence is validated by the adapters, never here
//! - Exactly one "www." is stripped per pass; the prefix match is case-sensitive

pub mod host;
pub mod types;

pub use host::{normalize_host, WWW_PREFIX};
pub use types::{EdgeRequest, Outcome, RedirectResponse, LOCATION};
