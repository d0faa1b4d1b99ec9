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

//! Load → deficit → cost, run once per input.

use crate::cost::aggregate_costs;
use crate::deficit::calculate_deficit;
use crate::error::Result;
use crate::loader::CsvLoader;
use deficit_types::{DailyCost, Dataset, PipelineConfig};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct DeficitPipeline {
    config: PipelineConfig,
}

impl DeficitPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<Vec<DailyCost>> {
        let dataset = self.loader().load_path(path)?;
        self.run_dataset(&dataset)
    }

    pub fn run_reader<R: Read>(&self, reader: R) -> Result<Vec<DailyCost>> {
        let dataset = self.loader().load_reader(reader)?;
        self.run_dataset(&dataset)
    }

    /// Apply the deficit and cost stages to an already loaded dataset
    pub fn run_dataset(&self, dataset: &Dataset) -> Result<Vec<DailyCost>> {
        let deficit = calculate_deficit(dataset.generation(), dataset.demand())?;
        debug!("Computed deficit for {} days", deficit.len());

        let costs = aggregate_costs(&deficit, dataset.prices(), self.config.report.rounding)?;
        info!(
            "Cost report ready: {} days, rounding {}",
            costs.len(),
            self.config.report.rounding
        );
        Ok(costs)
    }

    fn loader(&self) -> CsvLoader {
        CsvLoader::new(self.config.input.clone())
    }
}

/// Run the full pipeline on `path` with default settings
pub fn run(path: impl AsRef<Path>) -> Result<Vec<DailyCost>> {
    DeficitPipeline::default().run_path(path)
}
