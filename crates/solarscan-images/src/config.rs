//! Configuration for image loading.

use serde::{Deserialize, Serialize};

/// Image loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Maximum accepted file size in MB
    pub max_size_mb: u64,
    /// Accepted file extensions
    pub supported: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_size_mb: 10,
            supported: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }
}

impl ImageConfig {
    /// Check if an extension is accepted.
    pub fn is_format_supported(&self, extension: &str) -> bool {
        self.supported
            .iter()
            .any(|f| f.eq_ignore_ascii_case(extension))
    }

    /// Accepted extensions as a comma-separated string.
    pub fn supported_formats_string(&self) -> String {
        self.supported.join(", ")
    }

    /// Size limit in bytes, saturating at `u64::MAX`.
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }
}
