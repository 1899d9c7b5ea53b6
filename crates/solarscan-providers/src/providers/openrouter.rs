//! OpenRouter provider implementation
//!
//! Uses the OpenAI-compatible chat completions endpoint with a multi-part
//! user message (text prompt plus inline image).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::models::{TokenUsage, VisionRequest, VisionResponse};
use crate::provider::VisionProvider;

/// Retry delay assumed when a 429 carries no usable `retry-after` header
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// OpenRouter provider implementation
pub struct OpenRouterProvider {
    api_key: String,
    client: Client,
    base_url: String,
}

impl OpenRouterProvider {
    /// Create a provider from validated configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let api_key = config.api_key.clone().unwrap_or_default();

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the chat completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn get_auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    fn build_request(request: &VisionRequest) -> OpenRouterChatRequest<'_> {
        OpenRouterChatRequest {
            model: &request.model,
            messages: vec![OpenRouterMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: &request.prompt,
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: &request.image_url,
                        },
                    },
                ],
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }

    /// Convert the API response to our VisionResponse
    fn convert_response(
        response: OpenRouterChatResponse,
        requested_model: &str,
    ) -> Result<VisionResponse, ProviderError> {
        if let Some(api_error) = response.error {
            return Err(ProviderError::Api {
                status: api_error.code.unwrap_or(200),
                message: api_error.message,
            });
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        Ok(VisionResponse {
            content,
            model: response
                .model
                .unwrap_or_else(|| requested_model.to_string()),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }

    fn status_error(status: StatusCode, retry_after: Option<u64>, body: String) -> ProviderError {
        match status.as_u16() {
            401 | 403 => ProviderError::AuthError,
            429 => ProviderError::RateLimited(retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)),
            code => ProviderError::Api {
                status: code,
                message: if body.is_empty() {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                } else {
                    body
                },
            },
        }
    }
}

#[async_trait]
impl VisionProvider for OpenRouterProvider {
    fn id(&self) -> &str {
        "openrouter"
    }

    fn name(&self) -> &str {
        "OpenRouter"
    }

    async fn analyze(&self, request: &VisionRequest) -> Result<VisionResponse, ProviderError> {
        debug!(
            model = %request.model,
            image_url_len = request.image_url.len(),
            "Sending rooftop analysis request to OpenRouter"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", self.get_auth_header())
            .header("Content-Type", "application/json")
            .json(&Self::build_request(request))
            .send()
            .await
            .map_err(|e| {
                error!("OpenRouter API request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let error_text = response.text().await.unwrap_or_default();
            warn!("OpenRouter API error ({}): {}", status, error_text);
            return Err(Self::status_error(status, retry_after, error_text));
        }

        let body: OpenRouterChatResponse = response.json().await?;
        let result = Self::convert_response(body, &request.model)?;

        debug!(
            model = %result.model,
            content_len = result.content.len(),
            "Received rooftop analysis from OpenRouter"
        );
        Ok(result)
    }
}

/// OpenRouter API request format
#[derive(Debug, Serialize)]
struct OpenRouterChatRequest<'a> {
    model: &'a str,
    messages: Vec<OpenRouterMessage<'a>>,
    response_format: ResponseFormat,
}

/// OpenRouter API message format
#[derive(Debug, Serialize)]
struct OpenRouterMessage<'a> {
    role: &'static str,
    content: Vec<ContentPart<'a>>,
}

/// One part of a multi-part message
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// OpenRouter API response format
#[derive(Debug, Deserialize)]
struct OpenRouterChatResponse {
    #[serde(default)]
    choices: Vec<OpenRouterChoice>,
    model: Option<String>,
    usage: Option<OpenRouterUsage>,
    error: Option<OpenRouterError>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: Option<OpenRouterResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenRouterUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
    total_tokens: usize,
}

/// Error object OpenRouter may return with a 200 status
#[derive(Debug, Deserialize)]
struct OpenRouterError {
    message: String,
    code: Option<u16>,
}
