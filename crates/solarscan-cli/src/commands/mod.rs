// Command handlers for the solarscan CLI

pub mod analyze;
pub mod parse;
pub mod roi;

pub use analyze::AnalyzeCommand;
pub use parse::ParseCommand;
pub use roi::RoiCommand;

use crate::error::{CliError, CliResult};
use solarscan_core::ElectricityRate;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

/// Turn an optional `--rate` flag into a validated rate.
pub(crate) fn rate_or(flag: Option<f64>, fallback: ElectricityRate) -> CliResult<ElectricityRate> {
    match flag {
        Some(value) => ElectricityRate::new(value).map_err(|e| CliError::InvalidArgument {
            message: format!("--rate: {}", e),
        }),
        None => Ok(fallback),
    }
}
