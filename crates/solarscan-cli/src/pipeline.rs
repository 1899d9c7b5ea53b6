//! Image → provider → parser → calculator pipeline.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use solarscan_core::{analyze_response, ElectricityRate, Location, RooftopAnalysis};
use solarscan_images::ImageSource;
use solarscan_providers::{build_prompt, TokenUsage, VisionProvider, VisionRequest};
use tracing::{debug, info};

use crate::error::CliResult;

/// Outcome of one analysis run, as printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Parsed attributes and projection
    #[serde(flatten)]
    pub analysis: RooftopAnalysis,
    /// Location given to the model
    pub location: Location,
    /// Rate used for savings
    pub electricity_rate: ElectricityRate,
    /// Model that produced the attributes, if one was called
    pub model: Option<String>,
    /// Token usage reported by the provider
    pub usage: Option<TokenUsage>,
    /// When the report was produced
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Report for an analysis that did not involve a provider call.
    pub fn offline(analysis: RooftopAnalysis, location: Location, rate: ElectricityRate) -> Self {
        Self {
            analysis,
            location,
            electricity_rate: rate,
            model: None,
            usage: None,
            analyzed_at: Utc::now(),
        }
    }
}

/// Runs a rooftop image through a vision provider and the core.
pub struct RooftopAnalyzer {
    provider: Arc<dyn VisionProvider>,
    model: String,
}

impl RooftopAnalyzer {
    /// Create an analyzer for the given provider and model.
    pub fn new(provider: Arc<dyn VisionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Model requests are sent with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze one image.
    ///
    /// Provider failures and parse failures are both terminal; nothing is
    /// retried here.
    pub async fn analyze(
        &self,
        image: &ImageSource,
        location: &Location,
        rate: ElectricityRate,
    ) -> CliResult<AnalysisReport> {
        let prompt = build_prompt(location, rate);
        let request = VisionRequest::new(self.model.as_str(), prompt, image.data_url());

        info!(
            provider = self.provider.id(),
            model = %self.model,
            image = %image.path().display(),
            "Requesting rooftop analysis"
        );
        let response = self.provider.analyze(&request).await?;
        debug!(content = %response.content, "Raw model response");

        let analysis = analyze_response(&response.content, rate)?;

        Ok(AnalysisReport {
            analysis,
            location: location.clone(),
            electricity_rate: rate,
            model: Some(response.model),
            usage: response.usage,
            analyzed_at: Utc::now(),
        })
    }
}
