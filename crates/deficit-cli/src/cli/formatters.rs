// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.

//! Output formatters for the cost report.

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, CellAlignment, Table, presets::UTF8_FULL};
use deficit_core::{DailyCost, ReportConfig, ReportFormat, summarize};

/// Formatter for pretty tables
#[derive(Debug)]
pub struct TableFormatter;

/// Formatter for JSON output
#[derive(Debug)]
pub struct JsonFormatter;

/// Formatter for CSV output
#[derive(Debug)]
pub struct CsvFormatter;

impl TableFormatter {
    /// Format the daily costs as a table followed by a totals line
    pub fn format(costs: &[DailyCost], config: &ReportConfig) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Day").add_attribute(Attribute::Bold),
            Cell::new("Deficit\n(kWh)").add_attribute(Attribute::Bold),
            Cell::new(format!("Cost\n({})", config.currency)).add_attribute(Attribute::Bold),
        ]);

        for cost in costs {
            table.add_row(vec![
                Cell::new(cost.day).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", cost.deficit_kwh)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}", cost.cost)).set_alignment(CellAlignment::Right),
            ]);
        }

        let summary = summarize(costs, config.rounding);
        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&format!(
            "Total: {:.2} kWh deficit on {} of {} days, cost {:.2} {}\n",
            summary.total_deficit_kwh,
            summary.deficit_days,
            summary.days,
            summary.total_cost,
            config.currency
        ));
        output.push_str(&format!("Rounding: {}\n", config.rounding));

        output
    }
}

impl JsonFormatter {
    /// Pretty-printed JSON array of `{day, deficit_kwh, cost}` objects
    pub fn format(costs: &[DailyCost]) -> Result<String> {
        let mut output =
            serde_json::to_string_pretty(costs).context("Failed to serialize report as JSON")?;
        output.push('\n');
        Ok(output)
    }
}

impl CsvFormatter {
    /// `day,deficit_kwh,cost` header followed by one line per day
    pub fn format(costs: &[DailyCost]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for cost in costs {
            writer
                .serialize(cost)
                .context("Failed to serialize report as CSV")?;
        }
        // serialize() only emits the header alongside the first record
        if costs.is_empty() {
            writer.write_record(["day", "deficit_kwh", "cost"])?;
        }

        let bytes = writer.into_inner().context("Failed to flush CSV output")?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

/// Render the report in the configured format
pub fn render(costs: &[DailyCost], config: &ReportConfig) -> Result<String> {
    match config.format {
        ReportFormat::Table => Ok(TableFormatter::format(costs, config)),
        ReportFormat::Json => JsonFormatter::format(costs),
        ReportFormat::Csv => CsvFormatter::format(costs),
    }
}
