// =============================================================================
// ERROR MODULE
// =============================================================================
// This module defines custom error types and their HTTP responses.
//
// LEARNING NOTES:
// - Rust doesn't have exceptions; it uses Result<T, E> for error handling
// - thiserror crate makes defining error types easy
// - We convert our errors to HTTP responses using Axum's IntoResponse
//
// Most catalog input problems are NOT errors: bad page numbers fall back to
// defaults, unknown sort fields are ignored, unknown filter values match
// nothing. What is left is a broken request body or query string.
// =============================================================================

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body was not usable JSON for the endpoint
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

// =============================================================================
// HTTP RESPONSE CONVERSION
// =============================================================================
// By implementing IntoResponse for AppError, handlers can simply return
// Result<Json<T>, AppError> and errors become proper HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // Keep axum's own status: 400 for syntax, 415 for a missing
            // JSON content type, 422 for type mismatches
            AppError::InvalidBody(rejection) => (
                rejection.status(),
                ErrorResponse::with_details(
                    "INVALID_BODY",
                    "Request body could not be parsed",
                    rejection.body_text(),
                ),
            ),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", msg.clone()),
            ),
        };

        tracing::error!(
            error_code = %body.error,
            status = status.as_u16(),
            error = %self,
            "Request failed"
        );

        (status, Json(body)).into_response()
    }
}

/// A convenient type alias for Results that use our error type.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
