// Argument parsing for the solarscan command line

use std::path::PathBuf;

use clap::Parser;
use proptest::prelude::*;
use solarscan_cli::router::{Cli, Commands};

#[test]
fn test_analyze_with_all_flags() {
    let cli = Cli::try_parse_from([
        "solarscan",
        "analyze",
        "roof.png",
        "--location",
        "Austin, TX",
        "--rate",
        "0.12",
        "--model",
        "openai/gpt-4o",
        "--api-key",
        "sk-test",
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze {
            image,
            location,
            rate,
            model,
            api_key,
            json,
        } => {
            assert_eq!(image, PathBuf::from("roof.png"));
            assert_eq!(location.as_deref(), Some("Austin, TX"));
            assert_eq!(rate, Some(0.12));
            assert_eq!(model.as_deref(), Some("openai/gpt-4o"));
            assert_eq!(api_key.as_deref(), Some("sk-test"));
            assert!(json);
        }
        other => panic!("expected analyze, got {:?}", other),
    }
}

#[test]
fn test_analyze_requires_image() {
    assert!(Cli::try_parse_from(["solarscan", "analyze"]).is_err());
}

#[test]
fn test_roi_requires_area_and_kwh() {
    assert!(Cli::try_parse_from(["solarscan", "roi", "--area", "100"]).is_err());
    assert!(Cli::try_parse_from(["solarscan", "roi", "--kwh", "100"]).is_err());

    let cli = Cli::try_parse_from(["solarscan", "roi", "--area", "100", "--kwh", "10000"]).unwrap();
    match cli.command {
        Commands::Roi {
            area,
            kwh,
            rate,
            json,
        } => {
            assert_eq!(area, 100.0);
            assert_eq!(kwh, 10000.0);
            assert_eq!(rate, None);
            assert!(!json);
        }
        other => panic!("expected roi, got {:?}", other),
    }
}

#[test]
fn test_roi_accepts_negative_numbers_for_validation() {
    let cli = Cli::try_parse_from(["solarscan", "roi", "--area", "-5", "--kwh", "100"]).unwrap();
    assert!(matches!(cli.command, Commands::Roi { area, .. } if area == -5.0));
}

#[test]
fn test_parse_from_stdin_marker() {
    let cli = Cli::try_parse_from(["solarscan", "parse", "-", "--rate", "0.2"]).unwrap();
    match cli.command {
        Commands::Parse { input, rate, .. } => {
            assert_eq!(input, "-");
            assert_eq!(rate, Some(0.2));
        }
        other => panic!("expected parse, got {:?}", other),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "solarscan",
        "parse",
        "response.txt",
        "-v",
        "--config",
        "custom.yaml",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);
    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));

    let cli = Cli::try_parse_from(["solarscan", "-q", "roi", "--area", "1", "--kwh", "1"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_rate_must_be_numeric() {
    assert!(Cli::try_parse_from(["solarscan", "parse", "-", "--rate", "cheap"]).is_err());
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["solarscan", "upload", "roof.png"]).is_err());
}

proptest! {
    #[test]
    fn prop_roi_figures_parse_exactly(area in 0.25f64..10_000.0, kwh in 0.0f64..100_000.0) {
        let area_arg = area.to_string();
        let kwh_arg = kwh.to_string();
        let cli = Cli::try_parse_from([
            "solarscan", "roi", "--area", area_arg.as_str(), "--kwh", kwh_arg.as_str(),
        ]).unwrap();

        match cli.command {
            Commands::Roi { area: parsed_area, kwh: parsed_kwh, .. } => {
                prop_assert_eq!(parsed_area, area);
                prop_assert_eq!(parsed_kwh, kwh);
            }
            other => prop_assert!(false, "expected roi, got {:?}", other),
        }
    }
}
