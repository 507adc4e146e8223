//! Shared Error Types
//!
//! This module defines error types that are shared between the server and
//! any client of the HTTP API. They describe failures that can be detected
//! from the wire data alone, before anything touches the database.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or malformed
//!
//! # Usage
//!
//! ```rust
//! use linkfolio::shared::error::SharedError;
//!
//! let error = SharedError::validation("url", "URL must be a valid absolute http(s) URL");
//! assert_eq!(error.field(), Some("url"));
//! ```
use thiserror::Error;

/// Errors that can be detected on either side of the HTTP boundary
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }

    /// Message suitable for returning to an API caller
    pub fn public_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
