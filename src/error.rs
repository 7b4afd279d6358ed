//! Error types for the Mindmap server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::mindmap::EditError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Extraction(e) => {
                if let ExtractionError::Internal(detail) = e {
                    tracing::error!("Internal extraction error: {}", detail);
                } else {
                    tracing::info!(code = e.code(), "Extraction rejected: {}", e);
                }
                (e.status_code(), e.code(), e.to_string())
            }
            AppError::Edit(e) => (StatusCode::NOT_FOUND, "NODE_NOT_FOUND", e.to_string()),
            AppError::Json(e) => {
                tracing::error!("Serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
