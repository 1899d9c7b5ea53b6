//! Request and response models for vision providers

use serde::{Deserialize, Serialize};

/// A single image analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionRequest {
    /// Model to use
    pub model: String,
    /// Instruction text
    pub prompt: String,
    /// Image as a `data:` URL
    pub image_url: String,
}

impl VisionRequest {
    /// Create a new request
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            image_url: image_url.into(),
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: usize,
    /// Number of tokens in the completion
    pub completion_tokens: usize,
    /// Total tokens used
    pub total_tokens: usize,
}

/// Raw model output for an analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionResponse {
    /// Message content as returned by the model
    pub content: String,
    /// Model that produced the answer
    pub model: String,
    /// Token usage, when the provider reports it
    pub usage: Option<TokenUsage>,
}
