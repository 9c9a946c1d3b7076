//! API errors and their HTTP mapping.

use crate::models::submission::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Everything the submission endpoint can fail with. Downstream failures
/// collapse to the same generic 500 for the caller; the failing stage only
/// shows up in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("all fields are required")]
    Validation,

    #[error("mail transport: {0}")]
    Mail(anyhow::Error),

    #[error("database: {0}")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Validation => (StatusCode::BAD_REQUEST, "All fields are required"),
            ApiError::Mail(e) => {
                error!("mail send failed: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email. Please try again later",
                )
            }
            ApiError::Store(e) => {
                error!("contact insert failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email. Please try again later",
                )
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: msg.to_string(),
            }),
        )
            .into_response()
    }
}
