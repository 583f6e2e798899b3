//! # Client Error Types
//!
//! Unified error handling for the medflow-client library and CLI operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for service client and workflow operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{service} API error: HTTP {status} - {message}")]
    ApiError {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ClientError {
    /// Create a configuration error with a custom message
    pub fn config_error(message: impl Into<String>) -> Self {
        ClientError::ConfigError(message.into())
    }

    /// Create an invalid-response error for a missing or malformed field
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ClientError::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
