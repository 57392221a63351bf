use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::GENERIC_FAILURE;
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Replace the outward message of an internal failure with a route-level one.
    ///
    /// The underlying cause never reaches the caller. Database errors are already
    /// logged by the repository that raised them; other internal causes are logged
    /// here. NotFound and BadRequest pass through untouched.
    pub fn context(self, message: &str) -> Self {
        match self {
            AppError::Database(_) => AppError::Internal(message.to_string()),
            AppError::Internal(detail) => {
                if detail != message {
                    tracing::error!("{}: {}", message, detail);
                }
                AppError::Internal(message.to_string())
            }
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE.to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // Messages carried here are already caller-safe (see `context`)
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
