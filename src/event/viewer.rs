//! Event shapes exchanged with the edge runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::normalizer::{normalize_host, EdgeRequest, Outcome, RedirectResponse};

/// Errors raised at the event boundary.
#[derive(Debug, Error)]
pub enum EventError {
    /// Event JSON does not have the expected shape.
    #[error("Malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    /// `request.headers.host.value` is absent or not a string.
    #[error("Request has no host header")]
    MissingHost,

    /// Handler output could not be rendered.
    #[error("Failed to encode handler output: {0}")]
    Encode(serde_json::Error),
}

/// Inbound viewer-request event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewerEvent {
    pub request: RequestDescriptor,

    /// `version`, `context`, `viewer` and anything else the runtime sends.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// The request descriptor, kept as received apart from the typed `uri`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RequestDescriptor {
    pub uri: String,

    #[serde(default)]
    pub headers: Map<String, Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RequestDescriptor {
    /// Value of the `host` header, if present.
    pub fn host(&self) -> Option<&str> {
        self.headers
            .get("host")
            .and_then(|h| h.get("value"))
            .and_then(Value::as_str)
    }

    /// Build the normalizer input, failing when the host is missing.
    pub fn to_edge_request(&self) -> Result<EdgeRequest, EventError> {
        let host = self.host().ok_or(EventError::MissingHost)?;
        Ok(EdgeRequest::new(host, self.uri.as_str()))
    }
}

/// A single header entry in runtime shape: `{ "value": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderField {
    pub value: String,
}

/// Response descriptor handed back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub status_code: u16,
    pub status_description: String,
    pub headers: BTreeMap<String, HeaderField>,
}

impl From<RedirectResponse> for ResponseDescriptor {
    fn from(response: RedirectResponse) -> Self {
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| (name.clone(), HeaderField { value: value.clone() }))
            .collect();

        Self {
            status_code: response.status_code().as_u16(),
            status_description: response.status_description().to_string(),
            headers,
        }
    }
}

/// What the handler returns: the request, or a response in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HandlerOutput {
    Request(RequestDescriptor),
    Response(ResponseDescriptor),
}

/// Run the normalizer on a viewer-request event.
pub fn handle_event(event: ViewerEvent) -> Result<HandlerOutput, EventError> {
    let edge_request = event.request.to_edge_request()?;

    match normalize_host(edge_request) {
        Outcome::Redirect(response) => Ok(HandlerOutput::Response(response.into())),
        Outcome::Forward(_) => Ok(HandlerOutput::Request(event.request)),
    }
}

/// JSON in, JSON out.
pub fn handle_event_json(input: &str) -> Result<String, EventError> {
    let event: ViewerEvent = serde_json::from_str(input)?;
    let output = handle_event(event)?;
    serde_json::to_string(&output).map_err(EventError::Encode)
}
