//! Backend Error Types
//!
//! Errors surfaced by [`HealthApi`](super::HealthApi) implementations.
//! Views never show these verbatim; they map every failure to a fixed
//! message per operation and log the detail.

use thiserror::Error;

/// Errors that can occur when talking to the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Backend could not be reached
    #[error("Backend unavailable: {0}")]
    Network(String),

    /// No response within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Backend answered with a non-success status
    #[error("Backend error {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        /// `msg` field of the backend's error body, when present
        message: Option<String>,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Message the backend attached to a rejection, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(msg), ..
            } => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Network(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Request(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;
