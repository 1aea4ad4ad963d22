use serde::{Deserialize, Serialize};

use crate::{Symbol, TickTime, TradingDate};

/// One stock's traded volume for one trading day. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub volume: u64,
}

/// One intraday trade print. Many per stock per day, kept in arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntradayTick {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub time: TickTime,
    pub last_traded_qty: u64,
}

/// One point of a rolling-volume series: the tick itself plus the sum of
/// traded quantities over the trailing window ending at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingPoint {
    pub time: TickTime,
    pub last_traded_qty: u64,
    pub cumulative_volume: u64,
}

/// Baseline table row. `average_volume` is `None` when the stock has no
/// daily history before the reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRow {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub average_volume: Option<f64>,
}

/// Crossing table row. `first_crossing` is `None` when rolling volume never
/// exceeded the baseline that day, a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossingResult {
    pub symbol: Symbol,
    pub date: TradingDate,
    pub first_crossing: Option<TickTime>,
}
