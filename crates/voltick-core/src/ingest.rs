//! CSV ingestion for daily and intraday datasets.
//!
//! Any malformed field aborts the whole load with an [`IngestError`] naming
//! the file and line; there is no partial or recoverable mode. Columns
//! beyond the ones named here are ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::{DailyRecord, IngestError, IntradayTick, Symbol, TickTime, TradingDate, ValidationError};

#[derive(Debug, Deserialize)]
struct RawDailyRow {
    #[serde(rename = "Stock Name")]
    stock_name: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Debug, Deserialize)]
struct RawIntradayRow {
    #[serde(rename = "Stock Name")]
    stock_name: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "Last Traded Quantity")]
    last_traded_qty: String,
}

/// Load the daily dataset: `Stock Name`, `Date` (DD-MM-YYYY), `Volume`.
pub fn load_daily(path: impl AsRef<Path>) -> Result<Vec<DailyRecord>, IngestError> {
    let path = path.as_ref();
    let file = open(path)?;
    let records = parse_daily(file, path)?;
    info!(path = %path.display(), rows = records.len(), "loaded daily records");
    Ok(records)
}

/// Load one intraday dataset: `Stock Name`, `Date`, `Time` (HH:MM:SS),
/// `Last Traded Quantity`.
pub fn load_intraday(path: impl AsRef<Path>) -> Result<Vec<IntradayTick>, IngestError> {
    let path = path.as_ref();
    let file = open(path)?;
    let ticks = parse_intraday(file, path)?;
    info!(path = %path.display(), rows = ticks.len(), "loaded intraday ticks");
    Ok(ticks)
}

/// Load and concatenate several intraday files in argument order into one
/// table's worth of ticks.
pub fn load_intraday_all(paths: &[PathBuf]) -> Result<Vec<IntradayTick>, IngestError> {
    let mut ticks = Vec::new();
    for path in paths {
        ticks.extend(load_intraday(path)?);
    }
    Ok(ticks)
}

fn open(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|error| IngestError::csv(path, csv::Error::from(error)))
}

fn parse_daily<R: Read>(reader: R, path: &Path) -> Result<Vec<DailyRecord>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawDailyRow>().enumerate() {
        let line = data_line(index);
        let row = row.map_err(|error| IngestError::csv(path, error))?;
        records.push(DailyRecord {
            symbol: field(path, line, Symbol::parse(&row.stock_name))?,
            date: field(path, line, TradingDate::parse(&row.date))?,
            volume: field(path, line, parse_volume(&row.volume))?,
        });
    }

    Ok(records)
}

fn parse_intraday<R: Read>(reader: R, path: &Path) -> Result<Vec<IntradayTick>, IngestError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut ticks = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawIntradayRow>().enumerate() {
        let line = data_line(index);
        let row = row.map_err(|error| IngestError::csv(path, error))?;
        ticks.push(IntradayTick {
            symbol: field(path, line, Symbol::parse(&row.stock_name))?,
            date: field(path, line, TradingDate::parse(&row.date))?,
            time: field(path, line, TickTime::parse(&row.time))?,
            last_traded_qty: field(path, line, parse_volume(&row.last_traded_qty))?,
        });
    }

    Ok(ticks)
}

fn parse_volume(value: &str) -> Result<u64, ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidVolume {
            value: value.to_owned(),
        })
}

fn field<T>(
    path: &Path,
    line: u64,
    parsed: Result<T, ValidationError>,
) -> Result<T, IngestError> {
    parsed.map_err(|error| IngestError::bad_field(path, line, error))
}

// Header occupies line 1; the first data record is line 2.
fn data_line(record_index: usize) -> u64 {
    record_index as u64 + 2
}
