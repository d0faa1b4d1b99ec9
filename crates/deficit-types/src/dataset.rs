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

//! Input readings and the column-oriented dataset built from them.

use serde::{Deserialize, Serialize};

/// One parsed input row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Day index as given in the input (1-based)
    pub day: u32,
    /// Local generation for the day (kWh)
    pub generation: f64,
    /// Demand for the day (kWh)
    pub demand: f64,
    /// Unit price of purchased energy (currency/kWh)
    pub price: f64,
}

/// Readings stored as four index-aligned columns.
///
/// Rows can only be appended as whole [`Reading`]s, so every column always
/// has the same length. Row order is the order of insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    days: Vec<u32>,
    generation: Vec<f64>,
    demand: Vec<f64>,
    prices: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rows: usize) -> Self {
        Self {
            days: Vec::with_capacity(rows),
            generation: Vec::with_capacity(rows),
            demand: Vec::with_capacity(rows),
            prices: Vec::with_capacity(rows),
        }
    }

    pub fn push(&mut self, reading: Reading) {
        self.days.push(reading.day);
        self.generation.push(reading.generation);
        self.demand.push(reading.demand);
        self.prices.push(reading.price);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn generation(&self) -> &[f64] {
        &self.generation
    }

    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Reassemble row `index`, if present
    pub fn reading(&self, index: usize) -> Option<Reading> {
        Some(Reading {
            day: *self.days.get(index)?,
            generation: *self.generation.get(index)?,
            demand: *self.demand.get(index)?,
            price: *self.prices.get(index)?,
        })
    }

    pub fn readings(&self) -> impl Iterator<Item = Reading> + '_ {
        (0..self.len()).filter_map(|i| self.reading(i))
    }
}

impl FromIterator<Reading> for Dataset {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for reading in iter {
            dataset.push(reading);
        }
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(day: u32, generation: f64, demand: f64, price: f64) -> Reading {
        Reading {
            day,
            generation,
            demand,
            price,
        }
    }

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut dataset = Dataset::with_capacity(2);
        dataset.push(reading(1, 100.0, 150.0, 0.30));
        dataset.push(reading(2, 200.0, 150.0, 0.4));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.days(), &[1, 2]);
        assert_eq!(dataset.generation(), &[100.0, 200.0]);
        assert_eq!(dataset.demand(), &[150.0, 150.0]);
        assert_eq!(dataset.prices(), &[0.30, 0.4]);
    }

    #[test]
    fn test_readings_preserve_insertion_order() {
        let rows = vec![
            reading(3, 50.0, 200.0, 0.25),
            reading(1, 100.0, 150.0, 0.30),
            reading(2, 200.0, 150.0, 0.4),
        ];
        let dataset: Dataset = rows.clone().into_iter().collect();

        assert_eq!(dataset.readings().collect::<Vec<_>>(), rows);
        assert_eq!(dataset.days(), &[3, 1, 2]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::new();
        assert!(dataset.is_empty());
        assert!(dataset.reading(0).is_none());
        assert_eq!(dataset.readings().count(), 0);
    }
}
