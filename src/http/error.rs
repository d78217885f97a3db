//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// A pipeline collaborator failed
    Pipeline(PipelineError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            // Collaborator failures stay behind a stable error body so
            // internal details never leak raw to the client.
            AppError::Pipeline(e) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("PIPELINE_ERROR", "upstream pipeline failure").with_details(e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("lightcurve array required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn pipeline_error_maps_to_502() {
        let response =
            AppError::Pipeline(PipelineError::Catalog("archive unreachable".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
