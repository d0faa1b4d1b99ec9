// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use anyhow::{Context, Result};
use clap::Parser;
use deficit_cli::cli::{Cli, load_config, render};
use deficit_core::DeficitPipeline;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_tracing(level: &str) -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config)?;
    info!(
        "Input: {} | format: {} | rounding: {}",
        cli.input.display(),
        config.report.format,
        config.report.rounding
    );

    let pipeline = DeficitPipeline::new(config);
    let costs = pipeline
        .run_path(&cli.input)
        .with_context(|| format!("Failed to build cost report from {}", cli.input.display()))?;

    let report = render(&costs, &pipeline.config().report)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}
