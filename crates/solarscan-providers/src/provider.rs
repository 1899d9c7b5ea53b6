//! Provider trait

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::models::{VisionRequest, VisionResponse};

/// A service that answers a text prompt about an image
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Get the provider's unique identifier
    fn id(&self) -> &str;

    /// Get the provider's human-readable name
    fn name(&self) -> &str;

    /// Send one image analysis request and return the raw answer
    async fn analyze(&self, request: &VisionRequest) -> Result<VisionResponse, ProviderError>;
}
