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

//! Deficit cost aggregation and rounding

use crate::error::{DeficitError, Result};
use deficit_types::{CostSummary, DailyCost, RoundingMode};
use rust_decimal::{Decimal, RoundingStrategy};

/// Reported costs always carry exactly this many decimal places
pub const COST_DECIMAL_PLACES: u32 = 2;

const COST_SCALE: f64 = 100.0;

fn strategy(mode: RoundingMode) -> RoundingStrategy {
    match mode {
        RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
    }
}

/// Round `value` to [`COST_DECIMAL_PLACES`].
///
/// The exact binary value of the float is rounded, not its shortest decimal
/// form. Returns `None` for NaN, infinities and magnitudes beyond `Decimal`.
pub fn round_cost(value: f64, mode: RoundingMode) -> Option<f64> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(COST_DECIMAL_PLACES, strategy(mode));
    rounded.rescale(COST_DECIMAL_PLACES);
    if rounded.scale() != COST_DECIMAL_PLACES {
        return None;
    }

    // A single division keeps the result the nearest f64 to the decimal
    Some(rounded.mantissa() as f64 / COST_SCALE)
}

/// Combine per-day deficits with unit prices into the cost report.
///
/// Days are numbered from 1 by position, independent of any day column in
/// the input.
pub fn aggregate_costs(
    deficit: &[f64],
    prices: &[f64],
    mode: RoundingMode,
) -> Result<Vec<DailyCost>> {
    if deficit.len() != prices.len() {
        return Err(DeficitError::length_mismatch(
            "cost aggregation",
            deficit.len(),
            prices.len(),
        ));
    }

    (1_u32..)
        .zip(deficit.iter().zip(prices))
        .map(|(day, (&deficit_kwh, &price))| -> Result<DailyCost> {
            let raw = deficit_kwh * price;
            let cost = round_cost(raw, mode)
                .ok_or(DeficitError::CostOutOfRange { day, value: raw })?;

            Ok(DailyCost {
                day,
                deficit_kwh,
                cost,
            })
        })
        .collect()
}

/// Totals over a report. The total cost is the sum of the rounded daily
/// costs, rounded once more with the same mode.
pub fn summarize(costs: &[DailyCost], mode: RoundingMode) -> CostSummary {
    let total_cost: f64 = costs.iter().map(|c| c.cost).sum();

    CostSummary {
        days: costs.len(),
        deficit_days: costs.iter().filter(|c| c.deficit_kwh > 0.0).count(),
        total_deficit_kwh: costs.iter().map(|c| c.deficit_kwh).sum(),
        total_cost: round_cost(total_cost, mode).unwrap_or(total_cost),
    }
}
