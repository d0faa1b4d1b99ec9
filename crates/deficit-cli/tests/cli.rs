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

//! Binary-level tests for `deficit-report`

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const POWER_DATA: &str = "day,generation,demand,cost_per_kwh\n\
                          1,100,150,0.30\n\
                          2,200,150,0.4\n\
                          3,50,200,0.25\n";

fn write_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn deficit_report() -> Command {
    Command::cargo_bin("deficit-report").unwrap()
}

#[test]
fn test_json_report() {
    let input = write_file(POWER_DATA);

    let output = deficit_report()
        .arg(input.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report,
        serde_json::json!([
            {"day": 1, "deficit_kwh": 50.0, "cost": 15.0},
            {"day": 2, "deficit_kwh": 0.0, "cost": 0.0},
            {"day": 3, "deficit_kwh": 150.0, "cost": 37.5}
        ])
    );
}

#[test]
fn test_default_table_report() {
    let input = write_file(POWER_DATA);

    deficit_report()
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("37.50"))
        .stdout(predicate::str::contains("cost 52.50 EUR"));
}

#[test]
fn test_csv_report_to_file() {
    let input = write_file(POWER_DATA);
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("report.csv");

    deficit_report()
        .arg(input.path())
        .args(["--format", "csv", "--output"])
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&report_path).unwrap();
    assert!(written.starts_with("day,deficit_kwh,cost"));
    assert_eq!(written.lines().count(), 4);
}

#[test]
fn test_config_file_sets_rounding() {
    let input = write_file("day,generation,demand,cost_per_kwh\n1,0,1,0.125\n");
    let config = write_file("[report]\nrounding = \"half_up\"\nformat = \"json\"\n");

    let output = deficit_report()
        .arg(input.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report[0]["cost"], 0.13);
}

#[test]
fn test_missing_column_exits_non_zero() {
    let input = write_file("day,generation,cost_per_kwh\n1,100,0.30\n");

    deficit_report()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required column: demand"));
}

#[test]
fn test_bad_cell_exits_non_zero() {
    let input = write_file("day,generation,demand,cost_per_kwh\n1,abc,150,0.30\n");

    deficit_report()
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1"))
        .stderr(predicate::str::contains("generation"));
}

#[test]
fn test_missing_input_file_exits_non_zero() {
    deficit_report()
        .arg("/nonexistent/power_data.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build cost report"));
}
