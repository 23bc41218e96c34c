use crate::k8s::PodPhase;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to get pod information: {0}")]
    DirectoryError(String),

    #[error("Failed to get pod information: pod {name} not found in namespace {namespace}")]
    NotFound { name: String, namespace: String },

    #[error("No matching pods found or multiple pods matched (selector '{selector}' matched {matched})")]
    AmbiguousOrMissing { selector: String, matched: usize },

    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),

    #[error("Pod {namespace}/{name} is not in the 'Running' state (phase: {phase})")]
    PodNotReady {
        namespace: String,
        name: String,
        phase: PodPhase,
    },

    #[error("Pod {namespace}/{name} has no IP address assigned")]
    NoPodAddress { namespace: String, name: String },

    #[error("Unsupported Accept header: {0}")]
    UnsupportedRepresentation(String),

    #[error("Failed to fetch status information: {0}")]
    FetchFailed(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::DirectoryError(_) | GatewayError::NotFound { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::AmbiguousOrMissing { .. } => StatusCode::NOT_FOUND,
            GatewayError::InvalidSelector(_) => StatusCode::BAD_REQUEST,
            GatewayError::PodNotReady { .. } | GatewayError::NoPodAddress { .. } => {
                StatusCode::PRECONDITION_FAILED
            }
            GatewayError::UnsupportedRepresentation(_) => StatusCode::NOT_ACCEPTABLE,
            GatewayError::FetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", message);
        } else {
            warn!(status = status.as_u16(), "{}", message);
        }

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
