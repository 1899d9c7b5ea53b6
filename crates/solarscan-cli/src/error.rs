// CLI error types and user-facing messages

use solarscan_core::{InputError, ParseError};
use solarscan_images::ImageError;
use solarscan_providers::{ProviderError, API_KEY_ENV};
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'solarscan --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nCheck ~/.solarscan/config.yaml or the file passed with --config.", msg)
            }
            CliError::Image(e) => format!("Image error: {}", e),
            CliError::Provider(ProviderError::ConfigError(msg)) => {
                format!("Provider configuration error: {}", msg)
            }
            CliError::Provider(ProviderError::AuthError) => format!(
                "Image analysis failed: authentication rejected.\n\nCheck the API key in {} or --api-key.",
                API_KEY_ENV
            ),
            CliError::Provider(e) => {
                format!("Image analysis failed: {}\n\nPlease try again.", e)
            }
            CliError::Parse(e) => format!(
                "Failed to parse model response ({}): {}\n\nRaw model response:\n{}",
                e.category(),
                e,
                e.raw_text()
            ),
            CliError::Input(e) => format!("Invalid input: {}", e),
            CliError::Serialization(msg) => format!("Failed to serialize output: {}", msg),
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
