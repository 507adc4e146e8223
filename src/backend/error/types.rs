/**
 * API Error Types
 *
 * This module defines the error taxonomy every handler reports through.
 * Each variant maps to exactly one HTTP status code and carries a message
 * that is safe to show to the caller; raw store errors are logged at the
 * point they are classified and never reach the response body.
 *
 * # Status Code Mapping
 *
 * - `InvalidInput` / `Conflict` / `Validation` - 400 Bad Request
 * - `InvalidCredentials` / `Unauthorized` - 401 Unauthorized
 * - `Forbidden` - 403 Forbidden
 * - `NotFound` - 404 Not Found
 * - `Unavailable` - 503 Service Unavailable (database not configured)
 * - `Internal` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Which unique column a registration collided on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Email,
    Username,
}

impl ConflictField {
    pub fn message(self) -> &'static str {
        match self {
            Self::Email => "Email already exists",
            Self::Username => "Username already exists",
        }
    }
}

/// Errors returned by API handlers
///
/// # Usage
///
/// ```rust
/// use linkfolio::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::invalid_input("Title is required");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A request field failed shared validation
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Unique constraint violation on email or username
    #[error("Conflict: {}", .0.message())]
    Conflict(ConflictField),

    /// Login failed; identical for unknown email and wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired or forged session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Authenticated, but not the owner of the resource
    #[error("Forbidden")]
    Forbidden,

    /// No such user or link
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The database pool was never configured
    #[error("Database not configured")]
    Unavailable,

    /// Store or I/O failure; the message is generic
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Log a store error and hide it behind a generic message
    pub fn store(context: &str, err: sqlx::Error) -> Self {
        tracing::error!(error = ?err, "{}", context);
        Self::Internal(context.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the response body
    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            Self::Validation(err) => err.public_message().to_string(),
            Self::Conflict(field) => field.message().to_string(),
            Self::Internal(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let cases = [
            (ApiError::invalid_input("bad"), StatusCode::BAD_REQUEST),
            (ApiError::Conflict(ConflictField::Email), StatusCode::BAD_REQUEST),
            (ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ApiError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden, StatusCode::FORBIDDEN),
            (ApiError::NotFound("Link"), StatusCode::NOT_FOUND),
            (ApiError::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
            (ApiError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(error.status_code(), status, "{error:?}");
        }
    }

    #[test]
    fn test_conflict_messages_name_the_field() {
        assert_eq!(ApiError::Conflict(ConflictField::Email).message(), "Email already exists");
        assert_eq!(ApiError::Conflict(ConflictField::Username).message(), "Username already exists");
    }

    #[test]
    fn test_from_shared_error() {
        let err: ApiError = SharedError::validation("title", "Title is required").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Title is required");
    }

    #[test]
    fn test_store_error_hides_details() {
        let err = ApiError::store("Failed to fetch links", sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to fetch links");
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound("User").message(), "User not found");
    }
}
