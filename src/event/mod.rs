//! Viewer-request event adapter.
//!
//! # Data Flow
//! ```text
//! event JSON from the edge runtime (or edge-invoke)
//!     → viewer.rs (deserialize, validate host presence)
//!     → normalizer::normalize_host
//!     → HandlerOutput (request descriptor as received, or 301 descriptor)
//!     → JSON back to the runtime
//! ```
//!
//! # Design Decisions
//! - Unknown request fields are carried through untouched
//! - Boundary validation lives here, the normalizer never sees bad input

pub mod viewer;

pub use viewer::{
    handle_event, handle_event_json, EventError, HandlerOutput, HeaderField, RequestDescriptor,
    ResponseDescriptor, ViewerEvent,
};
