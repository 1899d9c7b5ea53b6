//! Provider configuration
//!
//! The API key is always an explicit value on [`ProviderConfig`]. Resolving
//! it from flags, the environment, or a config file is the caller's job.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Environment variable callers conventionally read the API key from
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Default OpenRouter API base URL
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default vision model
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-prover-v2:free";

/// Settings for the vision provider
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key sent as a bearer token
    pub api_key: Option<String>,
    /// Base URL of the chat completions API
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl ProviderConfig {
    /// Replace the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Check that the configuration can be used for a request
    pub fn validate(&self) -> Result<(), ProviderError> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(ProviderError::ConfigError(format!(
                    "API key is required (set {} or pass --api-key)",
                    API_KEY_ENV
                )))
            }
        }
        if self.base_url.trim().is_empty() {
            return Err(ProviderError::ConfigError("Base URL is required".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(ProviderError::ConfigError("Model is required".to_string()));
        }
        if self.timeout_seconds == 0 {
            return Err(ProviderError::ConfigError(
                "Timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
