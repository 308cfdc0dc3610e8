//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request: name required",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2999 | Not Found  | 404 Not Found             |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed (missing field, malformed bulk payload).
    #[error("invalid request: {0}")]
    Validation(String),

    /// Player with the given id was not found.
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::PlayerNotFound(_) => 2001,
            Self::Persistence(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PlayerNotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
