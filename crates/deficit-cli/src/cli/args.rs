// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CLI argument definitions using clap.

use anyhow::{Result, anyhow};
use clap::Parser;
use deficit_core::PipelineConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "deficit-report")]
#[command(author, version, about = "Daily energy deficit cost report")]
#[command(
    long_about = "Compute, for every day in a CSV file, the demand not covered by local\n\
    generation and the cost of buying it at that day's price.\n\
    \nThe input needs a header with the columns day, generation, demand and\n\
    cost_per_kwh (any order, extra columns are ignored).\n\
    \nExamples:\n  \
    deficit-report power_data.csv\n  \
    deficit-report power_data.csv --format json\n  \
    deficit-report power_data.csv --rounding half-up --output report.csv --format csv"
)]
pub struct Cli {
    /// Input CSV file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format: table, json, or csv
    #[arg(long,
          value_parser = ["table", "json", "csv"],
          help = "How to print the report (default: table, or report.format from --config)")]
    pub format: Option<String>,

    /// Rounding of midpoint costs
    #[arg(
        long,
        value_parser = ["half-even", "half-up"],
        help = "Midpoint rounding for costs (default: half-even)",
        long_help = "How costs exactly halfway between two cents are rounded:\n  \
          - half-even: to the even cent (0.125 -> 0.12)\n  \
          - half-up: away from zero (0.125 -> 0.13)\n\
          \nRounding applies to the exact binary value of deficit * price."
    )]
    pub rounding: Option<String>,

    /// Field delimiter of the input file
    #[arg(long, value_name = "CHAR", help = "Input field delimiter (default: ',')")]
    pub delimiter: Option<char>,

    /// Optional TOML configuration file
    #[arg(
        long,
        value_name = "PATH",
        help = "Path to a TOML configuration file",
        long_help = "TOML file with [input] and [report] sections.\n\
          Command-line flags take precedence over values from the file.\n\
          \nExample:\n  \
          [report]\n  \
          rounding = \"half_up\"\n  \
          currency = \"CZK\""
    )]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log verbosity (logs go to stderr)
    #[arg(long, default_value = "warn",
          value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Cli {
    /// Overlay command-line flags on top of file configuration
    pub fn apply_overrides(&self, config: &mut PipelineConfig) -> Result<()> {
        if let Some(format) = &self.format {
            config.report.format = format.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(rounding) = &self.rounding {
            config.report.rounding = rounding.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(delimiter) = self.delimiter {
            config.input.delimiter = delimiter;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deficit_core::{ReportFormat, RoundingMode};

    #[test]
    fn test_minimal_args() {
        let cli = Cli::try_parse_from(["deficit-report", "power_data.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("power_data.csv"));
        assert_eq!(cli.log_level, "warn");
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["deficit-report"]).is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["deficit-report", "in.csv", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_overrides_win_over_file_config() {
        let cli = Cli::try_parse_from([
            "deficit-report",
            "in.csv",
            "--format",
            "json",
            "--rounding",
            "half-up",
            "--delimiter",
            ";",
        ])
        .unwrap();

        let mut config = PipelineConfig::default();
        config.report.format = ReportFormat::Csv;
        cli.apply_overrides(&mut config).unwrap();

        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.rounding, RoundingMode::HalfUp);
        assert_eq!(config.input.delimiter, ';');
    }

    #[test]
    fn test_no_flags_keep_file_config() {
        let cli = Cli::try_parse_from(["deficit-report", "in.csv"]).unwrap();

        let mut config = PipelineConfig::default();
        config.report.rounding = RoundingMode::HalfUp;
        cli.apply_overrides(&mut config).unwrap();

        assert_eq!(config.report.rounding, RoundingMode::HalfUp);
        assert_eq!(config.report.format, ReportFormat::Table);
    }
}
