// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::*;
use crate::error::CliResult;

/// SolarScan - rooftop solar potential from a satellite image
#[derive(Parser, Debug)]
#[command(name = "solarscan")]
#[command(bin_name = "solarscan")]
#[command(about = "Estimate rooftop solar potential and payback from a satellite image")]
#[command(
    long_about = "SolarScan: estimate rooftop solar potential from a satellite image.\n\nA vision model reads the roof (area, orientation, tilt, shading) and a fixed set of cost assumptions turns that into an installation cost and payback period.\n\nQuick Start:\n  • solarscan analyze roof.png            Analyze an image\n  • solarscan roi --area 100 --kwh 10000  ROI from known figures\n  • solarscan parse response.txt          Re-parse a saved model answer"
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: ./solarscan.yaml or ~/.solarscan/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a rooftop image
    #[command(about = "Analyze a rooftop image with a vision model and estimate ROI")]
    Analyze {
        /// Path to a PNG or JPEG image
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Location of the property, e.g. "Austin, TX"
        #[arg(short, long)]
        location: Option<String>,

        /// Electricity rate in $/kWh
        #[arg(short, long)]
        rate: Option<f64>,

        /// Model to use
        #[arg(short, long)]
        model: Option<String>,

        /// OpenRouter API key (overrides OPENROUTER_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate ROI from known roof figures
    #[command(about = "Compute an ROI projection without calling a model")]
    #[command(allow_negative_numbers = true)]
    Roi {
        /// Usable roof area in square meters
        #[arg(long)]
        area: f64,

        /// Estimated annual production in kWh
        #[arg(long)]
        kwh: f64,

        /// Electricity rate in $/kWh
        #[arg(short, long)]
        rate: Option<f64>,

        /// Print the projection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a saved model response
    #[command(about = "Parse a saved model response (file or '-' for stdin) and estimate ROI")]
    Parse {
        /// Response file, or '-' to read stdin
        #[arg(value_name = "FILE")]
        input: String,

        /// Electricity rate in $/kWh
        #[arg(short, long)]
        rate: Option<f64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse CLI arguments and route to appropriate handler
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        crate::logging::init_logging(cli.verbose, cli.quiet);

        Self::execute(&cli).await
    }

    /// Execute a command
    pub async fn execute(cli: &Cli) -> CliResult<()> {
        match &cli.command {
            Commands::Analyze {
                image,
                location,
                rate,
                model,
                api_key,
                json,
            } => {
                let cmd = AnalyzeCommand::new(image.clone())
                    .with_location(location.clone())
                    .with_rate(*rate)
                    .with_model(model.clone())
                    .with_api_key(api_key.clone())
                    .with_config(cli.config.clone())
                    .with_json(*json);
                cmd.execute().await
            }
            Commands::Roi {
                area,
                kwh,
                rate,
                json,
            } => {
                let cmd = RoiCommand::new(*area, *kwh)
                    .with_rate(*rate)
                    .with_config(cli.config.clone())
                    .with_json(*json);
                cmd.execute().await
            }
            Commands::Parse { input, rate, json } => {
                let cmd = ParseCommand::new(input.clone())
                    .with_rate(*rate)
                    .with_config(cli.config.clone())
                    .with_json(*json);
                cmd.execute().await
            }
        }
    }
}
