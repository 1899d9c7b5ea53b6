// Parse a saved model response

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use solarscan_core::analyze_response;

use super::analyze::print_report;
use super::{rate_or, Command};
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::pipeline::AnalysisReport;

/// Input name that means "read standard input"
pub const STDIN_MARKER: &str = "-";

/// Parse a model response from a file or stdin and print the analysis
pub struct ParseCommand {
    input: String,
    rate: Option<f64>,
    config: Option<PathBuf>,
    json: bool,
}

impl ParseCommand {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            rate: None,
            config: None,
            json: false,
        }
    }

    pub fn with_rate(mut self, rate: Option<f64>) -> Self {
        self.rate = rate;
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

    fn read_input(&self) -> CliResult<String> {
        if self.input == STDIN_MARKER {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        } else {
            Ok(std::fs::read_to_string(&self.input)?)
        }
    }

    /// Read the input and run it through the parser and calculator.
    pub fn build_report(&self) -> CliResult<AnalysisReport> {
        let config = AppConfig::load(self.config.as_deref())?;
        let rate = rate_or(self.rate, config.defaults.electricity_rate)?;

        let text = self.read_input()?;
        let analysis = analyze_response(&text, rate)?;
        Ok(AnalysisReport::offline(
            analysis,
            config.defaults.location,
            rate,
        ))
    }
}

#[async_trait]
impl Command for ParseCommand {
    async fn execute(&self) -> CliResult<()> {
        let report = self.build_report()?;
        print_report(&report, self.json)
    }
}
