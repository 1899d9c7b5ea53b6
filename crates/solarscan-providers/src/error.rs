//! Error types for the providers module

use thiserror::Error;

/// Errors that can occur when calling a vision provider
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// Authentication failed (never includes key details)
    #[error("Authentication failed")]
    AuthError,

    /// Rate limited by provider
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Request did not complete in time
    #[error("Request timed out")]
    Timeout,

    /// Network error occurred
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Provider answered with a non-success status or an error body
    #[error("Provider API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error text returned by the provider
        message: String,
    },

    /// Response carried no message content
    #[error("Provider returned no content")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::SerializationError(err.to_string())
        } else {
            ProviderError::NetworkError(err.to_string())
        }
    }
}
