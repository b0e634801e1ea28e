//! `www.` to bare-domain redirect.
//!
//! # Responsibilities
//! - Detect the literal `www.` prefix on the Host value
//! - Build the `https://` redirect target, keeping the URI verbatim
//! - Hand every other request back untouched
//!
//! # Design Decisions
//! - Case-sensitive match: `WWW.example.com` is not redirected
//! - One level only: `www.www.example.com` redirects to `www.example.com`
//! - A bare `www.` host yields an empty authority (`https:///x`)

use crate::normalizer::types::{EdgeRequest, Outcome, RedirectResponse};

/// Prefix stripped from redirected hosts.
pub const WWW_PREFIX: &str = "www.";

/// Redirect `www.` hosts to their bare domain, pass everything else through.
pub fn normalize_host(request: EdgeRequest) -> Outcome {
    match request.host().strip_prefix(WWW_PREFIX) {
        Some(bare_host) => {
            let location = format!("https://{}{}", bare_host, request.uri());
            Outcome::Redirect(RedirectResponse::moved_permanently(location))
        }
        None => Outcome::Forward(request),
    }
}
