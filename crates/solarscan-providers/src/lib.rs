//! Vision provider integration for solarscan.
//!
//! Sends a rooftop image and analysis prompt to a hosted vision-language
//! model and returns the raw text answer. Parsing that answer is left to
//! `solarscan-core`.

pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod providers;

pub use config::{ProviderConfig, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::ProviderError;
pub use models::{TokenUsage, VisionRequest, VisionResponse};
pub use prompt::build_prompt;
pub use provider::VisionProvider;
pub use providers::OpenRouterProvider;
