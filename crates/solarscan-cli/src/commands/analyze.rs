// Analyze a rooftop image with a vision model

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use solarscan_core::Location;
use solarscan_images::ImageSource;
use solarscan_providers::{OpenRouterProvider, API_KEY_ENV};

use super::{rate_or, Command};
use crate::config::{resolve_api_key, AppConfig};
use crate::error::CliResult;
use crate::logging;
use crate::output::{self, OutputStyle};
use crate::pipeline::{AnalysisReport, RooftopAnalyzer};

/// Analyze a rooftop image and print the ROI report
pub struct AnalyzeCommand {
    image: PathBuf,
    location: Option<String>,
    rate: Option<f64>,
    model: Option<String>,
    api_key: Option<String>,
    config: Option<PathBuf>,
    json: bool,
}

impl AnalyzeCommand {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            location: None,
            rate: None,
            model: None,
            api_key: None,
            config: None,
            json: false,
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_rate(mut self, rate: Option<f64>) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = model;
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

#[async_trait]
impl Command for AnalyzeCommand {
    async fn execute(&self) -> CliResult<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        let location = match &self.location {
            Some(value) => Location::new(value.as_str())?,
            None => config.defaults.location.clone(),
        };
        let rate = rate_or(self.rate, config.defaults.electricity_rate)?;

        let image = ImageSource::load(&self.image, &config.images)?;
        let (width, height) = image.dimensions();
        logging::info(&format!(
            "Loaded {} ({}x{}, {})",
            image.path().display(),
            width,
            height,
            image.format().as_str()
        ));

        let mut provider_config = config.provider.clone();
        provider_config.api_key = resolve_api_key(
            self.api_key.clone(),
            std::env::var(API_KEY_ENV).ok(),
            config.provider.api_key.clone(),
        );
        if let Some(model) = &self.model {
            provider_config = provider_config.with_model(model.as_str());
        }

        let provider = Arc::new(OpenRouterProvider::new(&provider_config)?);
        let analyzer = RooftopAnalyzer::new(provider, provider_config.model.as_str());

        logging::info(&format!("Analyzing rooftop with {}...", analyzer.model()));
        let report = analyzer.analyze(&image, &location, rate).await?;

        print_report(&report, self.json)
    }
}

/// Print a report as styled text or JSON.
pub(crate) fn print_report(report: &AnalysisReport, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let style = OutputStyle::default();
    println!("{}", style.success(&format!("Analysis complete for {}", report.location)));
    println!("{}", style.row("Electricity Rate", &report.electricity_rate.to_string()));
    if let Some(model) = &report.model {
        println!("{}", style.row("Model", model));
    }
    println!();
    println!("{}", output::render_analysis(&style, &report.analysis));
    Ok(())
}
