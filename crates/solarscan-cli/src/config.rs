//! Application configuration.
//!
//! Lookup order (first file found wins):
//! 1. Path passed with `--config`
//! 2. Project-level `solarscan.yaml` in the working directory
//! 3. User-level `~/.solarscan/config.yaml`
//! 4. Built-in defaults
//!
//! The API key is resolved separately by [`resolve_api_key`] so that only
//! the CLI ever looks at the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solarscan_core::{ElectricityRate, Location};
use solarscan_images::ImageConfig;
use solarscan_providers::ProviderConfig;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "solarscan.yaml";

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vision provider settings
    pub provider: ProviderConfig,
    /// Image loading settings
    pub images: ImageConfig,
    /// Defaults for per-run inputs
    pub defaults: DefaultsConfig,
}

/// Defaults applied when a flag is not given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Location sent to the model as context
    pub location: Location,
    /// Electricity rate in $/kWh
    pub electricity_rate: ElectricityRate,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = serde_yaml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration following the lookup order.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        Self::candidate_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map(|path| Self::from_file(&path))
            .unwrap_or_else(|| Ok(Self::default()))
    }

    /// Implicit config locations, highest priority first.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".solarscan").join("config.yaml"));
        }
        paths
    }
}

/// Pick the API key: flag, then environment, then config file.
pub fn resolve_api_key(
    flag: Option<String>,
    env_value: Option<String>,
    config_value: Option<String>,
) -> Option<String> {
    [flag, env_value, config_value]
        .into_iter()
        .flatten()
        .find(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_precedence() {
        let key = resolve_api_key(
            Some("flag".to_string()),
            Some("env".to_string()),
            Some("file".to_string()),
        );
        assert_eq!(key.as_deref(), Some("flag"));

        let key = resolve_api_key(None, Some("env".to_string()), Some("file".to_string()));
        assert_eq!(key.as_deref(), Some("env"));

        let key = resolve_api_key(Some(" ".to_string()), None, Some("file".to_string()));
        assert_eq!(key.as_deref(), Some("file"));

        assert_eq!(resolve_api_key(None, None, None), None);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.location.as_str(), "San Francisco, CA");
        assert_eq!(config.defaults.electricity_rate.value(), 0.15);
        assert_eq!(config.images.max_size_mb, 10);
        assert!(config.provider.api_key.is_none());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "defaults:\n  electricity_rate: 0.22\nprovider:\n  model: openai/gpt-4o\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.defaults.electricity_rate.value(), 0.22);
        assert_eq!(config.defaults.location.as_str(), "San Francisco, CA");
        assert_eq!(config.provider.model, "openai/gpt-4o");
        assert_eq!(config.provider.timeout_seconds, 60);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let yaml = "defaults:\n  electricity_rate: -0.5\n";
        assert!(serde_yaml::from_str::<AppConfig>(yaml).is_err());
    }
}
