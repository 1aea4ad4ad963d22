//! Canonical domain types for the volume-crossing analysis.
//!
//! All types validate at construction time: a [`Symbol`] is always a
//! normalized scrip name, a [`TradingDate`] / [`TickTime`] always came from
//! a well-formed `DD-MM-YYYY` / `HH:MM:SS` field. Records are immutable
//! once loaded.

mod calendar;
mod records;
mod symbol;

pub use calendar::{TickTime, TradingDate, MARKET_OPEN};
pub use records::{BaselineRow, CrossingResult, DailyRecord, IntradayTick, RollingPoint};
pub use symbol::Symbol;
