//! CLI argument definitions for voltick.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `analyze` | Full pipeline: baselines, rolling series, crossings, report files |
//! | `baseline` | Baseline table only, to stdout |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Summary output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! # Full analysis over two intraday files, reports into ./out
//! voltick analyze daily.csv --intraday april19.csv --intraday april22.csv --out-dir out
//!
//! # Baselines for one date, as JSON
//! voltick baseline daily.csv --date 19-04-2024 --format json --pretty
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use voltick_core::TradingDate;

/// Intraday volume-crossing analyzer.
///
/// Computes each stock's 30-trading-day average daily volume and scans
/// intraday ticks for the first moment a rolling cumulative traded quantity
/// exceeds it.
#[derive(Debug, Parser)]
#[command(name = "voltick", version, about = "Intraday volume-crossing analyzer")]
pub struct Cli {
    /// Output format for the stdout summary.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Summary output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    Table,
    /// JSON array of summary rows.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full analysis and write the report files.
    Analyze(AnalyzeArgs),
    /// Compute the baseline table only.
    Baseline(BaselineArgs),
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Daily history CSV with `Stock Name`, `Date` (DD-MM-YYYY), and
    /// `Volume` columns.
    pub daily: PathBuf,

    /// Intraday tick CSV with `Stock Name`, `Date`, `Time` (HH:MM:SS), and
    /// `Last Traded Quantity` columns. Repeat the flag to concatenate
    /// several files, typically one per reference date.
    #[arg(long = "intraday", value_name = "CSV", required = true)]
    pub intraday: Vec<PathBuf>,

    /// Reference date to analyze (DD-MM-YYYY). Repeatable. Defaults to the
    /// distinct dates present in the intraday data.
    #[arg(long = "date", value_name = "DD-MM-YYYY", value_parser = TradingDate::parse)]
    pub dates: Vec<TradingDate>,

    /// Directory the report files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct BaselineArgs {
    /// Daily history CSV with `Stock Name`, `Date` (DD-MM-YYYY), and
    /// `Volume` columns.
    pub daily: PathBuf,

    /// Reference date (DD-MM-YYYY). Repeatable, at least one required.
    #[arg(long = "date", value_name = "DD-MM-YYYY", required = true, value_parser = TradingDate::parse)]
    pub dates: Vec<TradingDate>,
}
