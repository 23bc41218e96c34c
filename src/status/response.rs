use crate::status::{Representation, HTML_MEDIA_TYPE};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use podstatus_common::StatusReport;

/// Payload fetched from an agent, in the representation that was negotiated
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPayload {
    Reports(Vec<StatusReport>),
    /// Opaque markup, relayed untouched
    Markup(String),
}

impl StatusPayload {
    pub fn representation(&self) -> Representation {
        match self {
            StatusPayload::Reports(_) => Representation::Structured,
            StatusPayload::Markup(_) => Representation::Rendered,
        }
    }

    /// Text form for terminal output
    pub fn render_text(&self) -> serde_json::Result<String> {
        match self {
            StatusPayload::Reports(reports) => serde_json::to_string_pretty(reports),
            StatusPayload::Markup(markup) => Ok(markup.clone()),
        }
    }
}

impl IntoResponse for StatusPayload {
    fn into_response(self) -> Response {
        match self {
            StatusPayload::Reports(reports) => Json(reports).into_response(),
            StatusPayload::Markup(markup) => {
                ([(header::CONTENT_TYPE, HTML_MEDIA_TYPE)], markup).into_response()
            }
        }
    }
}
