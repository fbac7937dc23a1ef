//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Validation Errors**: required fields missing, or a body that is not valid JSON
/// - **Resource Errors**: the referenced account does not exist
/// - **Database Errors**: any sqlx::Error from store operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Store operation failed (connection error, query error, constraint violation).
    ///
    /// Returns HTTP 500 with no body; details are only logged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("User not found")]
    UserNotFound,

    /// Request body is missing a required field or cannot be decoded.
    ///
    /// Returns HTTP 400 Bad Request with the contained message.
    #[error("{0}")]
    InvalidRequest(String),
}

/// Undecodable JSON bodies are reported like any other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// Client errors return JSON with a single field:
/// ```json
/// { "error": "User not found" }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `UserNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error, empty body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "store operation failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
