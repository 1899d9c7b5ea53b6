// Offline ROI estimate from known roof figures

use std::path::PathBuf;

use async_trait::async_trait;
use solarscan_core::RoiCalculator;

use super::{rate_or, Command};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputStyle};

/// Compute an ROI projection without calling a model
pub struct RoiCommand {
    area: f64,
    kwh: f64,
    rate: Option<f64>,
    config: Option<PathBuf>,
    json: bool,
}

impl RoiCommand {
    pub fn new(area: f64, kwh: f64) -> Self {
        Self {
            area,
            kwh,
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

    /// Check the roof figures before computing.
    pub fn validate(&self) -> CliResult<()> {
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(CliError::InvalidArgument {
                message: format!("--area must be a number greater than 0, got {}", self.area),
            });
        }
        if !self.kwh.is_finite() || self.kwh < 0.0 {
            return Err(CliError::InvalidArgument {
                message: format!("--kwh must be a number of at least 0, got {}", self.kwh),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Command for RoiCommand {
    async fn execute(&self) -> CliResult<()> {
        self.validate()?;

        let defaults = match (&self.config, self.rate) {
            // An explicit rate makes the config file irrelevant.
            (None, Some(_)) => AppConfig::default(),
            (path, _) => AppConfig::load(path.as_deref())?,
        };
        let rate = rate_or(self.rate, defaults.defaults.electricity_rate)?;

        let projection = RoiCalculator::compute(self.area, self.kwh, rate.value());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&projection)?);
        } else {
            let style = OutputStyle::default();
            println!("{}", style.row("Electricity Rate", &rate.to_string()));
            println!();
            println!("{}", output::render_projection(&style, &projection));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_valid_figures() {
        assert!(RoiCommand::new(100.0, 10000.0).validate().is_ok());
        assert!(RoiCommand::new(50.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_figures() {
        for (area, kwh) in [(0.0, 100.0), (-3.0, 100.0), (f64::NAN, 100.0), (10.0, -1.0), (10.0, f64::INFINITY)] {
            let err = RoiCommand::new(area, kwh).validate().unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument { .. }));
        }
    }

    #[tokio::test]
    async fn test_negative_rate_is_rejected() {
        let err = RoiCommand::new(100.0, 10000.0)
            .with_rate(Some(-0.1))
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }
}
