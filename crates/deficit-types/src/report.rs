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

use serde::{Deserialize, Serialize};

/// Cost of covering one day's deficit from the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyCost {
    /// 1-based position of the row in the input
    pub day: u32,
    /// Demand not covered by local generation (kWh, never negative)
    pub deficit_kwh: f64,
    /// `deficit_kwh * price`, rounded to 2 decimal places
    pub cost: f64,
}

/// Totals over a full cost report
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Number of reported days
    pub days: usize,
    /// Days with a non-zero deficit
    pub deficit_days: usize,
    pub total_deficit_kwh: f64,
    /// Sum of the per-day (already rounded) costs
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_cost_field_names() {
        let cost = DailyCost {
            day: 1,
            deficit_kwh: 50.0,
            cost: 15.0,
        };

        let json = serde_json::to_value(cost).unwrap();
        assert_eq!(json["day"], 1);
        assert_eq!(json["deficit_kwh"], 50.0);
        assert_eq!(json["cost"], 15.0);
    }
}
