//! Report files and stdout summary rendering.
//!
//! The `analyze` command writes three report families into the output
//! directory:
//!
//! - `average_volumes.csv`: one row per (stock, reference date) baseline
//! - `rolling_volume_<DDMMYYYY>.csv`: one file per reference date, one row
//!   per retained tick with its cumulative volume
//! - `crossing_results.csv`: first crossing time per (stock, reference
//!   date), empty when the baseline was never exceeded
//!
//! The stdout summary joins baselines and crossings per (stock, date) and
//! renders as an aligned table or JSON.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;
use voltick_core::{AnalysisReport, BaselineRow, CrossingResult, RollingRow, Symbol, TickTime, TradingDate};

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn write_reports(out_dir: &Path, report: &AnalysisReport) -> Result<(), CliError> {
    fs::create_dir_all(out_dir)?;

    write_average_volumes(&out_dir.join("average_volumes.csv"), &report.baselines)?;
    for (date, rows) in &report.rolling {
        let name = format!("rolling_volume_{}.csv", date.compact());
        write_rolling(&out_dir.join(name), rows)?;
    }
    write_crossings(&out_dir.join("crossing_results.csv"), &report.crossings)?;

    Ok(())
}

fn write_average_volumes(path: &Path, rows: &[BaselineRow]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Stock Name", "Date", "Average Volume"])?;
    for row in rows {
        let date = row.date.to_string();
        let average = row
            .average_volume
            .map_or_else(String::new, |value| value.to_string());
        writer.write_record([row.symbol.as_str(), date.as_str(), average.as_str()])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "wrote average-volumes report");
    Ok(())
}

fn write_rolling(path: &Path, rows: &[RollingRow]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Stock Name",
        "Date",
        "Time",
        "Last Traded Quantity",
        "Cumulative Volume",
    ])?;
    for row in rows {
        let date = row.date.to_string();
        let time = row.time.to_string();
        let qty = row.last_traded_qty.to_string();
        let cumulative = row.cumulative_volume.to_string();
        writer.write_record([
            row.symbol.as_str(),
            date.as_str(),
            time.as_str(),
            qty.as_str(),
            cumulative.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "wrote rolling-volume report");
    Ok(())
}

fn write_crossings(path: &Path, rows: &[CrossingResult]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Stock Name", "Date", "Time"])?;
    for row in rows {
        let date = row.date.to_string();
        let time = row
            .first_crossing
            .map_or_else(String::new, |value| value.to_string());
        writer.write_record([row.symbol.as_str(), date.as_str(), time.as_str()])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "wrote crossing-results report");
    Ok(())
}

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    symbol: &'a Symbol,
    date: TradingDate,
    average_volume: Option<f64>,
    first_crossing: Option<TickTime>,
}

pub fn render_summary(
    report: &AnalysisReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    // Baseline and crossing tables are built by the same stock × date loop,
    // so they zip one-to-one.
    let rows: Vec<SummaryRow<'_>> = report
        .baselines
        .iter()
        .zip(&report.crossings)
        .map(|(baseline, crossing)| SummaryRow {
            symbol: &baseline.symbol,
            date: baseline.date,
            average_volume: baseline.average_volume,
            first_crossing: crossing.first_crossing,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows, pretty)?,
        OutputFormat::Table => {
            let width = symbol_width(rows.iter().map(|row| row.symbol));
            println!(
                "{:<width$}  {:<10}  {:>16}  {}",
                "Stock", "Date", "Avg Volume", "First Crossing"
            );
            for row in &rows {
                println!(
                    "{:<width$}  {}  {:>16}  {}",
                    row.symbol.as_str(),
                    row.date,
                    dash_or(row.average_volume),
                    dash_or(row.first_crossing),
                );
            }
        }
    }

    Ok(())
}

pub fn render_baselines(
    rows: &[BaselineRow],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => print_json(rows, pretty)?,
        OutputFormat::Table => {
            let width = symbol_width(rows.iter().map(|row| &row.symbol));
            println!("{:<width$}  {:<10}  {:>16}", "Stock", "Date", "Avg Volume");
            for row in rows {
                println!(
                    "{:<width$}  {}  {:>16}",
                    row.symbol.as_str(),
                    row.date,
                    dash_or(row.average_volume),
                );
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(rows: &T, pretty: bool) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(rows)?
    } else {
        serde_json::to_string(rows)?
    };
    println!("{payload}");
    Ok(())
}

fn symbol_width<'a>(symbols: impl Iterator<Item = &'a Symbol>) -> usize {
    symbols
        .map(|symbol| symbol.as_str().len())
        .max()
        .unwrap_or(0)
        .max("Stock".len())
}

fn dash_or(value: Option<impl ToString>) -> String {
    value.map_or_else(|| String::from("-"), |inner| inner.to_string())
}
