//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`LinkfolioClient`](super::LinkfolioClient)
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The base URL cannot address API paths
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The server answered with an error status
    #[error("Request failed: {status} - {message}")]
    Api { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(err) => err.status(),
            Self::InvalidBaseUrl(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// `{"error": ..., "status": ...}` body of a failed request
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Message from an error body, falling back to the status text
    pub(crate) fn message_from(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| status.to_string())
    }
}
