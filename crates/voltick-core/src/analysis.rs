//! Batch orchestration: stocks × reference dates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    baseline, first_crossing, rolling_series, BaselineRow, CrossingResult, DailyTable,
    IntradayTable, Symbol, TickTime, TradingDate,
};

/// One symbol-tagged row of a per-date rolling-series table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingRow {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub time: TickTime,
    pub last_traded_qty: u64,
    pub cumulative_volume: u64,
}

/// Everything one batch run produces: the baseline table, one rolling-series
/// table per reference date, and the crossing-results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub baselines: Vec<BaselineRow>,
    pub rolling: BTreeMap<TradingDate, Vec<RollingRow>>,
    pub crossings: Vec<CrossingResult>,
}

/// Baseline table for every stock in the daily dataset at each reference
/// date.
pub fn baseline_table(daily: &DailyTable, reference_dates: &[TradingDate]) -> Vec<BaselineRow> {
    let reference_dates = normalize_dates(reference_dates);

    let mut rows = Vec::new();
    for symbol in daily.symbols() {
        for &date in &reference_dates {
            rows.push(BaselineRow {
                symbol: symbol.clone(),
                date,
                average_volume: baseline(daily, symbol, date),
            });
        }
    }
    rows
}

/// Run the full analysis: for every stock in the daily dataset and every
/// reference date, compute the baseline, build the rolling series from that
/// date's ticks, and find the first crossing.
///
/// Each (stock, date) cell is computed independently over the immutable
/// tables; running twice on the same inputs yields an identical report.
pub fn run(
    daily: &DailyTable,
    intraday: &IntradayTable,
    reference_dates: &[TradingDate],
) -> AnalysisReport {
    let reference_dates = normalize_dates(reference_dates);

    let mut baselines = Vec::new();
    let mut crossings = Vec::new();
    let mut rolling: BTreeMap<TradingDate, Vec<RollingRow>> = reference_dates
        .iter()
        .map(|&date| (date, Vec::new()))
        .collect();

    for symbol in daily.symbols() {
        for &date in &reference_dates {
            let average_volume = baseline(daily, symbol, date);
            let series = rolling_series(intraday.ticks_for(symbol, date));
            let crossing = first_crossing(&series, average_volume);

            debug!(
                symbol = %symbol,
                %date,
                baseline = ?average_volume,
                ticks = series.len(),
                crossing = ?crossing.map(|t| t.to_string()),
                "analyzed cell"
            );

            if let Some(table) = rolling.get_mut(&date) {
                table.extend(series.into_iter().map(|point| RollingRow {
                    symbol: symbol.clone(),
                    date,
                    time: point.time,
                    last_traded_qty: point.last_traded_qty,
                    cumulative_volume: point.cumulative_volume,
                }));
            }

            baselines.push(BaselineRow {
                symbol: symbol.clone(),
                date,
                average_volume,
            });
            crossings.push(CrossingResult {
                symbol: symbol.clone(),
                date,
                first_crossing: crossing,
            });
        }
    }

    info!(
        stocks = daily.symbols().count(),
        dates = reference_dates.len(),
        crossings = crossings
            .iter()
            .filter(|result| result.first_crossing.is_some())
            .count(),
        "analysis complete"
    );

    AnalysisReport {
        baselines,
        rolling,
        crossings,
    }
}

fn normalize_dates(reference_dates: &[TradingDate]) -> Vec<TradingDate> {
    let mut dates = reference_dates.to_vec();
    dates.sort_unstable();
    dates.dedup();
    dates
}
