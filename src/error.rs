// Application error type and its conversion into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the web layer. The core never produces these; every
/// lookup miss there degrades to a documented default instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input, e.g. a blank model at submission time.
    #[error("{0}")]
    Validation(String),

    /// The prediction service answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// The prediction service could not be reached at all.
    #[error("Could not connect to the prediction service")]
    PredictorUnreachable(#[source] reqwest::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream(message) => {
                tracing::warn!("Upstream prediction error: {}", message);
                (StatusCode::BAD_GATEWAY, message)
            }
            AppError::PredictorUnreachable(source) => {
                tracing::warn!("Prediction service unreachable: {}", source);
                (
                    StatusCode::BAD_GATEWAY,
                    "Could not connect to the prediction service".to_string(),
                )
            }
            AppError::Internal(error) => {
                tracing::error!("Internal server error: {:?}", error);
                // Don't expose internal details to the client
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result alias used throughout the handlers.
pub type AppResult<T> = Result<T, AppError>;
