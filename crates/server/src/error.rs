//! Unified error handling for the API.
//!
//! Provides a unified `AppError` type mapping every failure class to a status
//! code and a JSON `{"error": ...}` body. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A JSON store could not be read or written.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A request body failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad or missing admin credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// JSON error body, matching what the storefront and admin UI expect.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        };

        // Don't expose store internals to clients
        let message = match self {
            Self::Store(_) => "Internal server error".to_string(),
            Self::Validation(message) | Self::NotFound(message) | Self::Unauthorized(message) => {
                message
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
