use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to fetch URL: {status} {status_text}")]
    FetchFailed { status: u16, status_text: String },

    #[error("Failed to fetch metadata: {0}")]
    Network(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::FetchFailed {
                status,
                status_text,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch URL: {status} {status_text}"),
            ),
            AppError::Network(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch metadata: {msg}"),
            ),
            AppError::Internal => {
                tracing::error!("Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
