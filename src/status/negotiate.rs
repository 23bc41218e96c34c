//! Accept-header negotiation between the two representations the agent serves.
//!
//! Matching is plain substring containment against the two supported media
//! types; weights and wildcards are not interpreted. JSON wins whenever it is
//! mentioned at all.

use crate::{GatewayError, Result};
use axum::http::{header, HeaderMap};
use std::fmt;

pub const JSON_MEDIA_TYPE: &str = "application/json";
pub const HTML_MEDIA_TYPE: &str = "text/html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// JSON array of status reports
    Structured,
    /// Agent-rendered HTML page
    Rendered,
}

impl Representation {
    pub fn negotiate(accept: &str) -> Result<Self> {
        let accept = accept.trim();

        if accept.is_empty() {
            return Ok(Representation::Rendered);
        }
        if accept.contains(JSON_MEDIA_TYPE) {
            Ok(Representation::Structured)
        } else if accept.contains(HTML_MEDIA_TYPE) {
            Ok(Representation::Rendered)
        } else {
            Err(GatewayError::UnsupportedRepresentation(accept.to_string()))
        }
    }

    /// Negotiate from request headers; a missing `Accept` counts as empty.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        match headers.get(header::ACCEPT) {
            None => Self::negotiate(""),
            Some(value) => match value.to_str() {
                Ok(accept) => Self::negotiate(accept),
                Err(_) => Err(GatewayError::UnsupportedRepresentation(
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )),
            },
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Representation::Structured => JSON_MEDIA_TYPE,
            Representation::Rendered => HTML_MEDIA_TYPE,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}
