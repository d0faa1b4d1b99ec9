// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! CLI module for the deficit cost report.

pub mod args;
pub mod config;
pub mod formatters;

pub use args::Cli;
pub use config::load_config;
pub use formatters::{CsvFormatter, JsonFormatter, TableFormatter, render};
