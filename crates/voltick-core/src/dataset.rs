//! Immutable in-memory tables over the loaded records.
//!
//! Grouping is a two-level partition keyed by symbol, then date. `BTreeMap`
//! keys make every iteration order deterministic regardless of input row
//! order, so repeated runs over the same data produce identical reports.

use std::collections::BTreeMap;

use crate::{DailyRecord, IntradayTick, Symbol, TradingDate};

/// All daily records, partitioned by stock.
#[derive(Debug, Default)]
pub struct DailyTable {
    by_symbol: BTreeMap<Symbol, Vec<DailyRecord>>,
}

impl DailyTable {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        let mut by_symbol: BTreeMap<Symbol, Vec<DailyRecord>> = BTreeMap::new();
        for record in records {
            by_symbol
                .entry(record.symbol.clone())
                .or_default()
                .push(record);
        }

        Self { by_symbol }
    }

    /// Distinct stocks, in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.by_symbol.keys()
    }

    /// All records for one stock, in load order. Empty for unknown stocks.
    pub fn records_for(&self, symbol: &Symbol) -> &[DailyRecord] {
        self.by_symbol.get(symbol).map_or(&[], Vec::as_slice)
    }

    pub fn record_count(&self) -> usize {
        self.by_symbol.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

/// All intraday ticks from every input file, partitioned by stock and date.
/// Within a partition, ticks keep their file arrival order.
#[derive(Debug, Default)]
pub struct IntradayTable {
    by_symbol: BTreeMap<Symbol, BTreeMap<TradingDate, Vec<IntradayTick>>>,
}

impl IntradayTable {
    pub fn new(ticks: Vec<IntradayTick>) -> Self {
        let mut by_symbol: BTreeMap<Symbol, BTreeMap<TradingDate, Vec<IntradayTick>>> =
            BTreeMap::new();
        for tick in ticks {
            by_symbol
                .entry(tick.symbol.clone())
                .or_default()
                .entry(tick.date)
                .or_default()
                .push(tick);
        }

        Self { by_symbol }
    }

    /// Ticks for one (stock, date), in arrival order. Empty when the stock
    /// did not trade that day.
    pub fn ticks_for(&self, symbol: &Symbol, date: TradingDate) -> &[IntradayTick] {
        self.by_symbol
            .get(symbol)
            .and_then(|by_date| by_date.get(&date))
            .map_or(&[], Vec::as_slice)
    }

    /// Distinct dates seen across all stocks, in chronological order.
    pub fn dates(&self) -> Vec<TradingDate> {
        let mut dates: Vec<TradingDate> = self
            .by_symbol
            .values()
            .flat_map(|by_date| by_date.keys().copied())
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    pub fn tick_count(&self) -> usize {
        self.by_symbol
            .values()
            .flat_map(|by_date| by_date.values())
            .map(Vec::len)
            .sum()
    }
}
