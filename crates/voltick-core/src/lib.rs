//! # Voltick Core
//!
//! Domain model and analytics for intraday volume-crossing detection.
//!
//! ## Overview
//!
//! Given a daily volume history and intraday tick files, this crate answers
//! one question per stock per reference date: at what time of day did the
//! rolling cumulative traded quantity first exceed the stock's
//! 30-trading-day average daily volume?
//!
//! The pipeline is a synchronous batch over fully materialized in-memory
//! tables:
//!
//! 1. [`ingest`] loads the CSV inputs into typed records; any malformed
//!    field aborts the run.
//! 2. [`baseline()`] averages the up-to-30 most recent daily volumes
//!    strictly before the reference date.
//! 3. [`rolling_series`] filters a day's ticks to market open (09:15:00) or
//!    later and computes a positional 3600-tick rolling sum.
//! 4. [`first_crossing`] scans for the first point strictly above the
//!    baseline.
//! 5. [`analysis::run`] drives 2-4 for every stock × reference date and
//!    collects the report tables.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Validated domain types (`Symbol`, `TradingDate`, records) |
//! | [`dataset`] | Immutable grouped tables over loaded records |
//! | [`ingest`] | CSV loading with fatal, contextual parse errors |
//! | [`baseline`] | 30-day trailing average volume |
//! | [`rolling`] | Positional rolling-window cumulative volume |
//! | [`crossing`] | First-exceedance detection |
//! | [`analysis`] | Batch orchestration and report assembly |
//! | [`error`] | Error types |

pub mod analysis;
pub mod baseline;
pub mod crossing;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod rolling;

pub use analysis::{baseline_table, run, AnalysisReport, RollingRow};
pub use baseline::{baseline, BASELINE_WINDOW_DAYS};
pub use crossing::first_crossing;
pub use dataset::{DailyTable, IntradayTable};
pub use domain::{
    BaselineRow, CrossingResult, DailyRecord, IntradayTick, RollingPoint, Symbol, TickTime,
    TradingDate, MARKET_OPEN,
};
pub use error::{IngestError, ValidationError};
pub use ingest::{load_daily, load_intraday, load_intraday_all};
pub use rolling::{rolling_series, WINDOW_TICKS};
