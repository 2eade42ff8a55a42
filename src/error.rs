use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    Validation(#[from] ValidationError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable code sent as the `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::NotFound(_) => "not_found",
            AppError::Database(_) | AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(e) => e.to_string(),
            AppError::NotFound(what) => format!("{} not found", what),
            AppError::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                "an internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "an internal error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": self.code(),
            "message": message,
        }));

        (self.status(), body).into_response()
    }
}
