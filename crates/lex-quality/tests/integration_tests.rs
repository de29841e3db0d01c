//! Integration tests for the data-quality report.
//!
//! These tests load CSV fixtures from disk and check the full report.

use lex_quality::{
    LoadOptions, QualityError, Report, ReportDocument, ReportGenerator, Table, check_duplicates,
    check_missing_values, check_outliers, check_uniformity, generate_report,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_csv(filename: &str) -> Table {
    Table::load(fixtures_path().join(filename), &LoadOptions::default())
        .expect("Failed to read CSV file")
}

fn rows(entries: &[(&str, Vec<usize>)]) -> BTreeMap<String, Vec<usize>> {
    entries
        .iter()
        .map(|(name, rows)| (name.to_string(), rows.clone()))
        .collect()
}

// ============================================================================
// Full Report Tests
// ============================================================================

#[test]
fn test_full_report_sales() {
    let table = load_csv("sales.csv");
    assert_eq!(table.shape(), (8, 5));

    let report = generate_report(&table).unwrap();

    let expected = Report {
        // the empty `paid` cell on row 3 makes that boolean column non-uniform
        uniformity: rows(&[("paid", vec![0, 1, 2, 4, 5, 6, 7]), ("quantity", vec![2])]),
        duplicate_rows: vec![vec![1, 5]],
        missing_value_rows: vec![3, 7],
        outliers: rows(&[("order_id", vec![]), ("unit_price", vec![4])]),
    };
    assert_eq!(report, expected);
}

#[test]
fn test_clean_file_has_no_issues() {
    let table = load_csv("clean.csv");
    let report = generate_report(&table).unwrap();

    assert!(report.is_clean());
    assert!(report.uniformity.is_empty());
    assert_eq!(report.outliers, rows(&[("age", vec![]), ("score", vec![])]));
}

#[test]
fn test_semicolon_separator() {
    let options = LoadOptions::builder().separator(';').build().unwrap();
    let table = Table::load(fixtures_path().join("semicolon.csv"), &options).unwrap();

    assert_eq!(table.column_names(), vec!["city", "population", "coastal"]);

    let report = generate_report(&table).unwrap();
    assert_eq!(report.uniformity, rows(&[("population", vec![3])]));
    assert!(report.duplicate_rows.is_empty());
    assert!(report.missing_value_rows.is_empty());
    // "none" keeps population a text column, so nothing is numeric
    assert!(report.outliers.is_empty());
}

#[test]
fn test_gaps_and_padded_numbers() {
    let table = load_csv("gaps.csv");
    let report = generate_report(&table).unwrap();

    let expected = Report {
        // `price` mixes "2" (int) with floats, so it is listed without rows
        uniformity: rows(&[("label", vec![0, 2, 3]), ("price", vec![])]),
        duplicate_rows: vec![],
        // every row has a gap in `empty`
        missing_value_rows: vec![0, 1, 2, 3],
        // Q1 = 5.75, Q3 = 30.25, upper fence = 67.0
        outliers: rows(&[("empty", vec![]), ("padded", vec![3]), ("price", vec![])]),
    };
    assert_eq!(report, expected);
}

#[test]
fn test_header_only_file() {
    let table = load_csv("header_only.csv");
    assert_eq!(table.height(), 0);
    assert!(table.is_empty());

    let report = generate_report(&table).unwrap();
    assert_eq!(report, Report::default());
}

// ============================================================================
// Individual Check Tests
// ============================================================================

#[test]
fn test_checks_match_report_fields() {
    let table = load_csv("sales.csv");
    let report = generate_report(&table).unwrap();

    assert_eq!(check_uniformity(&table).unwrap(), report.uniformity);
    assert_eq!(check_duplicates(&table).unwrap(), report.duplicate_rows);
    assert_eq!(check_missing_values(&table).unwrap(), report.missing_value_rows);
    assert_eq!(check_outliers(&table).unwrap(), report.outliers);
}

#[test]
fn test_reported_rows_are_valid_indexes() {
    let table = load_csv("sales.csv");
    let report = generate_report(&table).unwrap();
    let n = table.height();

    let all_rows = report
        .uniformity
        .values()
        .flatten()
        .chain(report.duplicate_rows.iter().flatten())
        .chain(report.missing_value_rows.iter())
        .chain(report.outliers.values().flatten());

    for &row in all_rows {
        assert!(row < n, "row {} out of range for {} rows", row, n);
    }
}

#[test]
fn test_report_is_idempotent() {
    let table = load_csv("sales.csv");
    let first = generate_report(&table).unwrap();
    let second = generate_report(&table).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Loading and Output Tests
// ============================================================================

#[test]
fn test_missing_file_is_a_load_failure() {
    let result = Table::load(fixtures_path().join("no_such_file.csv"), &LoadOptions::default());

    match result {
        Err(err @ QualityError::FileNotFound(_)) => {
            assert!(err.is_load_failure());
            assert_eq!(err.error_code(), "FILE_NOT_FOUND");
        }
        other => panic!("Expected FileNotFound, got: {:?}", other.map(|t| t.shape())),
    }
}

#[test]
fn test_report_json_round_trip_through_file() {
    let table = load_csv("sales.csv");
    let report = generate_report(&table).unwrap();
    let document = ReportDocument::new("sales.csv", &table, report);

    let dir = tempfile::tempdir().unwrap();
    let generator = ReportGenerator::new(dir.path().to_path_buf());
    let path = generator.write_report_to_file(&document, "sales").unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(json["input_file"], "sales.csv");
    assert_eq!(json["report"]["DUPLICATE_ROWS"], serde_json::json!([[1, 5]]));
    assert_eq!(json["report"]["MISSING_VALUE_ROWS"], serde_json::json!([3, 7]));
    assert_eq!(json["report"]["UNIFORMITY"]["quantity"], serde_json::json!([2]));
    assert_eq!(json["report"]["OUTLIERS"]["unit_price"], serde_json::json!([4]));
}
