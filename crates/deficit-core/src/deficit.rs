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

use crate::error::{DeficitError, Result};

/// Per-day shortfall: `max(0, demand - generation)`.
///
/// Surplus generation is dropped, it is never carried over to later days.
pub fn calculate_deficit(generation: &[f64], demand: &[f64]) -> Result<Vec<f64>> {
    if generation.len() != demand.len() {
        return Err(DeficitError::length_mismatch(
            "deficit calculation",
            generation.len(),
            demand.len(),
        ));
    }

    Ok(generation
        .iter()
        .zip(demand)
        .map(|(generated, demanded)| (demanded - generated).max(0.0))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_calculation() {
        let deficit = calculate_deficit(&[100.0, 200.0, 50.0], &[150.0, 150.0, 200.0]).unwrap();
        assert_eq!(deficit, vec![50.0, 0.0, 150.0]);
    }

    #[test]
    fn test_surplus_is_not_carried_over() {
        // Day 1 surplus of 500 kWh must not offset day 2
        let deficit = calculate_deficit(&[600.0, 0.0], &[100.0, 80.0]).unwrap();
        assert_eq!(deficit, vec![0.0, 80.0]);
    }

    #[test]
    fn test_deficit_is_never_negative() {
        let generation = [0.0, 1.0, 10.0, 99.5, 100.0, 100.5, 1e9];
        let demand = [0.0, 0.5, 20.0, 100.0, 100.0, 100.0, 1.0];
        let deficit = calculate_deficit(&generation, &demand).unwrap();

        assert_eq!(deficit.len(), generation.len());
        for (i, value) in deficit.iter().enumerate() {
            assert!(*value >= 0.0);
            if generation[i] >= demand[i] {
                assert_eq!(*value, 0.0, "day {i} has enough generation");
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(calculate_deficit(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let err = calculate_deficit(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            DeficitError::LengthMismatch {
                left: 2,
                right: 1,
                ..
            }
        ));
    }
}
