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

//! FluxION deficit cost engine
//!
//! Computes, for each day of a CSV input, the energy demand not covered by
//! local generation and the cost of buying it from the grid.
//!
//! ## Stages
//!
//! - **Loader**: CSV with `day`, `generation`, `demand`, `cost_per_kwh` columns
//! - **Deficit**: `max(0, demand - generation)` per day
//! - **Cost**: `deficit * price`, rounded to 2 decimals with a pinned mode

pub mod cost;
pub mod deficit;
pub mod error;
pub mod loader;
pub mod pipeline;

pub use cost::{COST_DECIMAL_PLACES, aggregate_costs, round_cost, summarize};
pub use deficit::calculate_deficit;
pub use error::{DeficitError, Result};
pub use loader::{CsvLoader, REQUIRED_COLUMNS, load_dataset};
pub use pipeline::{DeficitPipeline, run};

pub use deficit_types::*;
