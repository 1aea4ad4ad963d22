//! Behavior-driven tests for CSV ingestion
//!
//! These tests verify loading from real files: well-formed inputs become
//! typed tables, malformed inputs abort the whole run with file and line
//! context, and several intraday files concatenate into one table.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use voltick_core::{
    analysis, load_daily, load_intraday, load_intraday_all, DailyTable, IngestError,
    IntradayTable, ValidationError,
};
use voltick_tests::{date, symbol, time};

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("fixture file must write");
    path
}

// =============================================================================
// Loading well-formed files
// =============================================================================

#[test]
fn wellformed_daily_csv_loads_into_typed_records() {
    // Given: A daily file in the exchange's DD-MM-YYYY format
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        &dir,
        "daily.csv",
        "Stock Name,Date,Volume\n\
         ABC,01-04-2024,1000\n\
         abc,02-04-2024,2000\n",
    );

    // When: The user loads it
    let records = load_daily(&path).expect("load should succeed");

    // Then: Rows are typed and symbols normalized
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].symbol, symbol("ABC"));
    assert_eq!(records[1].date, date("02-04-2024"));
    assert_eq!(records[1].volume, 2000);
}

#[test]
fn wellformed_intraday_csv_loads_into_typed_ticks() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        &dir,
        "intraday.csv",
        "Stock Name,Date,Time,Last Traded Quantity\n\
         ABC,19-04-2024,09:15:00,50\n\
         ABC,19-04-2024,09:15:01,60\n",
    );

    let ticks = load_intraday(&path).expect("load should succeed");

    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].time, time("09:15:00"));
    assert_eq!(ticks[1].last_traded_qty, 60);
}

#[test]
fn several_intraday_files_concatenate_in_argument_order() {
    // Given: One file per reference date
    let dir = tempdir().expect("tempdir");
    let first = write_file(
        &dir,
        "april19.csv",
        "Stock Name,Date,Time,Last Traded Quantity\n\
         ABC,19-04-2024,09:15:00,1\n",
    );
    let second = write_file(
        &dir,
        "april22.csv",
        "Stock Name,Date,Time,Last Traded Quantity\n\
         ABC,22-04-2024,09:15:00,2\n",
    );

    // When: Both are loaded as one table
    let ticks = load_intraday_all(&[first, second]).expect("load should succeed");

    // Then: Rows appear in argument order and both dates are present
    assert_eq!(ticks.len(), 2);
    assert_eq!(ticks[0].last_traded_qty, 1);
    assert_eq!(ticks[1].last_traded_qty, 2);

    let table = IntradayTable::new(ticks);
    assert_eq!(table.dates(), vec![date("19-04-2024"), date("22-04-2024")]);
}

// =============================================================================
// Malformed input aborts the run
// =============================================================================

#[test]
fn malformed_date_aborts_with_file_and_line_context() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        &dir,
        "daily.csv",
        "Stock Name,Date,Volume\n\
         ABC,01-04-2024,1000\n\
         ABC,not-a-date,2000\n",
    );

    let error = load_daily(&path).expect_err("load must fail");

    match error {
        IngestError::BadField { path: p, line, source } => {
            assert!(p.ends_with("daily.csv"));
            assert_eq!(line, 3);
            assert!(matches!(source, ValidationError::InvalidDate { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_time_aborts_the_intraday_load() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        &dir,
        "intraday.csv",
        "Stock Name,Date,Time,Last Traded Quantity\n\
         ABC,19-04-2024,9.15am,50\n",
    );

    let error = load_intraday(&path).expect_err("load must fail");
    assert!(matches!(
        error,
        IngestError::BadField {
            source: ValidationError::InvalidTime { .. },
            ..
        }
    ));
}

#[test]
fn missing_required_column_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(&dir, "daily.csv", "Stock Name,Date\nABC,01-04-2024\n");

    assert!(load_daily(&path).is_err());
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempdir().expect("tempdir");
    assert!(load_daily(dir.path().join("nope.csv")).is_err());
}

// =============================================================================
// Files through to a report
// =============================================================================

#[test]
fn loaded_files_drive_the_full_analysis() {
    // Given: A stock with two days of history and a burst of trading
    let dir = tempdir().expect("tempdir");
    let daily_path = write_file(
        &dir,
        "daily.csv",
        "Stock Name,Date,Volume\n\
         ABC,17-04-2024,100\n\
         ABC,18-04-2024,200\n",
    );
    let intraday_path = write_file(
        &dir,
        "april19.csv",
        "Stock Name,Date,Time,Last Traded Quantity\n\
         ABC,19-04-2024,09:15:00,100\n\
         ABC,19-04-2024,09:15:01,100\n",
    );

    // When: Files load and the analysis runs over the intraday dates
    let daily = DailyTable::new(load_daily(&daily_path).expect("daily loads"));
    let intraday =
        IntradayTable::new(load_intraday_all(&[intraday_path]).expect("intraday loads"));
    let reference_dates = intraday.dates();
    let report = analysis::run(&daily, &intraday, &reference_dates);

    // Then: Baseline is 150 and the second tick (cumulative 200) crosses it
    assert_eq!(report.baselines[0].average_volume, Some(150.0));
    assert_eq!(report.crossings[0].first_crossing, Some(time("09:15:01")));
}
