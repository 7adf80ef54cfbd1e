//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::generation::{GenerationError, TriageError};
use crate::pipeline::interpretation::InterpretationError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Please provide symptoms for analysis")]
    MissingSymptoms,
    #[error("Model returned no text")]
    EmptyModelOutput,
    #[error("Model service not configured")]
    NotConfigured,
    #[error("Model service failure: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::MissingSymptoms => (
                StatusCode::BAD_REQUEST,
                "NO_SYMPTOMS",
                "Please provide symptoms for analysis".to_string(),
            ),
            ApiError::EmptyModelOutput => {
                tracing::error!("Model returned an empty completion");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_MODEL_OUTPUT",
                    "No response from AI model".to_string(),
                )
            }
            ApiError::NotConfigured => (
                StatusCode::BAD_GATEWAY,
                "MODEL_NOT_CONFIGURED",
                "AI model service is not configured".to_string(),
            ),
            ApiError::Upstream(detail) => {
                tracing::error!(detail, "Model service failure");
                (
                    StatusCode::BAD_GATEWAY,
                    "MODEL_UNAVAILABLE",
                    "AI model service request failed".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TriageError> for ApiError {
    fn from(err: TriageError) -> Self {
        match err {
            TriageError::NoSymptoms => ApiError::MissingSymptoms,
            TriageError::EmptyInput => ApiError::BadRequest("Input text is empty".into()),
            TriageError::Interpretation(InterpretationError::EmptyModelOutput) => {
                ApiError::EmptyModelOutput
            }
            TriageError::Generation(GenerationError::MissingApiKey) => ApiError::NotConfigured,
            TriageError::Generation(e) => ApiError::Upstream(e.to_string()),
        }
    }
}
