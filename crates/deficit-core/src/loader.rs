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

//! CSV ingestion into a [`Dataset`].
//!
//! Columns are located by header name, so column order does not matter and
//! unknown columns are ignored. Rows keep their file order.

use crate::error::{DeficitError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use deficit_types::{Dataset, InputConfig, Reading};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub const DAY_COLUMN: &str = "day";
pub const GENERATION_COLUMN: &str = "generation";
pub const DEMAND_COLUMN: &str = "demand";
pub const PRICE_COLUMN: &str = "cost_per_kwh";

/// Columns every input must carry, in the order they are checked
pub const REQUIRED_COLUMNS: [&str; 4] = [DAY_COLUMN, GENERATION_COLUMN, DEMAND_COLUMN, PRICE_COLUMN];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndex {
    day: usize,
    generation: usize,
    demand: usize,
    price: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or_else(|| DeficitError::MissingColumn {
                    column: column.to_owned(),
                })
        };

        Ok(Self {
            day: find(DAY_COLUMN)?,
            generation: find(GENERATION_COLUMN)?,
            demand: find(DEMAND_COLUMN)?,
            price: find(PRICE_COLUMN)?,
        })
    }
}

/// Loads readings from delimited text
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    config: InputConfig,
}

impl CsvLoader {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Open `path` and load every row. The file is closed before returning,
    /// whether or not parsing succeeded.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DeficitError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Reading dataset from {}", path.display());
        self.load_reader(file)
    }

    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Dataset> {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(DeficitError::InvalidDelimiter(self.config.delimiter))?;

        let reader = skip_bom(BufReader::new(reader))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(delimiter)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        debug!(columns = ?headers.iter().collect::<Vec<_>>(), "Column headers");
        let columns = ColumnIndex::from_headers(&headers)?;

        let mut dataset = Dataset::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            dataset.push(parse_reading(&record, i + 1, columns)?);
        }

        info!("Loaded {} readings", dataset.len());
        Ok(dataset)
    }
}

/// Load a dataset from a file with the given input settings
pub fn load_dataset(path: impl AsRef<Path>, config: &InputConfig) -> Result<Dataset> {
    CsvLoader::new(config.clone()).load_path(path)
}

fn skip_bom<R: BufRead>(mut reader: R) -> Result<R> {
    if reader
        .fill_buf()
        .map_err(csv::Error::from)?
        .starts_with(UTF8_BOM)
    {
        reader.consume(UTF8_BOM.len());
    }
    Ok(reader)
}

fn parse_reading(record: &StringRecord, row: usize, columns: ColumnIndex) -> Result<Reading> {
    let day: u32 = parse_cell(record, row, columns.day, DAY_COLUMN, "an integer >= 1")?;
    if day == 0 {
        return Err(format_error(record, row, columns.day, DAY_COLUMN, "an integer >= 1"));
    }

    Ok(Reading {
        day,
        generation: parse_quantity(record, row, columns.generation, GENERATION_COLUMN)?,
        demand: parse_quantity(record, row, columns.demand, DEMAND_COLUMN)?,
        price: parse_quantity(record, row, columns.price, PRICE_COLUMN)?,
    })
}

fn parse_quantity(
    record: &StringRecord,
    row: usize,
    index: usize,
    column: &str,
) -> Result<f64> {
    const EXPECTED: &str = "a finite number >= 0";

    let value: f64 = parse_cell(record, row, index, column, EXPECTED)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format_error(record, row, index, column, EXPECTED))
    }
}

fn parse_cell<T: FromStr>(
    record: &StringRecord,
    row: usize,
    index: usize,
    column: &str,
    expected: &'static str,
) -> Result<T> {
    record
        .get(index)
        .and_then(|cell| cell.parse().ok())
        .ok_or_else(|| format_error(record, row, index, column, expected))
}

fn format_error(
    record: &StringRecord,
    row: usize,
    index: usize,
    column: &str,
    expected: &'static str,
) -> DeficitError {
    DeficitError::Format {
        row,
        column: column.to_owned(),
        value: record.get(index).unwrap_or_default().to_owned(),
        expected,
    }
}
