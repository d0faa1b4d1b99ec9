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

//! Error types for the deficit pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeficitError {
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    #[error("row {row}: column '{column}' has invalid value '{value}', expected {expected}")]
    Format {
        /// 1-based data row (the header is not counted)
        row: usize,
        column: String,
        value: String,
        expected: &'static str,
    },

    #[error("{stage}: input sequences differ in length ({left} vs {right})")]
    LengthMismatch {
        stage: &'static str,
        left: usize,
        right: usize,
    },

    #[error("day {day}: cost {value} cannot be rounded")]
    CostOutOfRange { day: u32, value: f64 },

    #[error("invalid delimiter '{0}', expected a single ASCII character")]
    InvalidDelimiter(char),

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DeficitError {
    pub(crate) fn length_mismatch(stage: &'static str, left: usize, right: usize) -> Self {
        Self::LengthMismatch { stage, left, right }
    }
}

pub type Result<T> = std::result::Result<T, DeficitError>;
