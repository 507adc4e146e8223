//! Authentication request and response types
//!
//! These are the bodies of `POST /auth/register` and `POST /auth/login`.
//! Missing fields deserialize as empty strings so that the server can answer
//! with a uniform "Missing required fields" error.

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Register request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub username: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Generic acknowledgement body: `{"success": true}`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const OK: Self = Self { success: true };
}

impl RegisterRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            username: username.into(),
        }
    }

    /// Validate presence of all fields, then email and username format
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.email.trim().is_empty() || self.password.is_empty() || self.username.trim().is_empty() {
            return Err(SharedError::validation("request", "Missing required fields"));
        }

        if !self.email.contains('@') {
            return Err(SharedError::validation("email", "Invalid email format"));
        }

        if !is_valid_username(self.username.trim()) {
            return Err(SharedError::validation(
                "username",
                "Username must be 3-30 characters of letters, numbers, '_' or '-'",
            ));
        }

        Ok(())
    }
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Usernames appear in public URLs, so they are kept to a URL-safe alphabet
pub fn is_valid_username(username: &str) -> bool {
    (3..=30).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
