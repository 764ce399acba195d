use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dishcover_discovery::FlowError;
use dishcover_source::SourceError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Flow error: {0}")]
    FlowError(#[from] FlowError),

    #[error("Source error: {0}")]
    SourceError(#[from] SourceError),

    #[error("Recipe fetch failed: {0}")]
    FetchFailed(String),

    #[error("Internal server error")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match self {
            AppError::ValidationError(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", msg)
            }
            AppError::FlowError(err) => (
                StatusCode::CONFLICT,
                "Unavailable Action",
                err.to_string(),
            ),
            AppError::FetchFailed(msg) => (StatusCode::BAD_GATEWAY, "Recipe Fetch Failed", msg),
            AppError::SourceError(err) => {
                tracing::error!("source error: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Recipe Fetch Failed",
                    "Failed to fetch recipes. Please try again.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (
            status_code,
            Json(json!({
                "error": error_title,
                "message": error_message,
                "retryable": status_code == StatusCode::BAD_GATEWAY,
            })),
        )
            .into_response()
    }
}
