// SolarScan CLI library
// Exposes the command layer so it can be driven from tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod router;

pub use error::{CliError, CliResult};
pub use pipeline::{AnalysisReport, RooftopAnalyzer};
