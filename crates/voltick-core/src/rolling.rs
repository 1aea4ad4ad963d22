//! Rolling cumulative volume over intraday ticks.

use std::collections::VecDeque;

use crate::{IntradayTick, RollingPoint, MARKET_OPEN};

/// Trailing window size, in ticks.
///
/// The window is positional, not wall-clock: it approximates 60 minutes only
/// when ticks arrive about once per second. This mirrors the upstream data
/// pipeline's definition and is kept as-is.
pub const WINDOW_TICKS: usize = 3600;

/// Rolling cumulative-volume series for one (stock, date)'s ticks.
///
/// Ticks before [`MARKET_OPEN`] are dropped. The remainder is stably sorted
/// by time of day, so same-timestamp ticks keep their arrival order. Each
/// retained tick yields one point whose `cumulative_volume` is the sum of
/// traded quantities over the trailing `min(i + 1, WINDOW_TICKS)` ticks,
/// maintained as a running sum over a ring of trailing quantities.
///
/// No ticks at or after market open yields an empty series, not an error.
pub fn rolling_series(ticks: &[IntradayTick]) -> Vec<RollingPoint> {
    let mut retained: Vec<&IntradayTick> = ticks
        .iter()
        .filter(|tick| tick.time >= MARKET_OPEN)
        .collect();
    retained.sort_by_key(|tick| tick.time);

    let mut window: VecDeque<u64> = VecDeque::with_capacity(WINDOW_TICKS.min(retained.len()));
    let mut running_sum: u64 = 0;
    let mut series = Vec::with_capacity(retained.len());

    for tick in retained {
        if window.len() == WINDOW_TICKS {
            let evicted = window.pop_front().unwrap_or(0);
            running_sum -= evicted;
        }
        window.push_back(tick.last_traded_qty);
        running_sum += tick.last_traded_qty;

        series.push(RollingPoint {
            time: tick.time,
            last_traded_qty: tick.last_traded_qty,
            cumulative_volume: running_sum,
        });
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Symbol, TickTime, TradingDate};

    fn tick(at: &str, qty: u64) -> IntradayTick {
        IntradayTick {
            symbol: Symbol::parse("ABC").expect("symbol must parse"),
            date: TradingDate::parse("19-04-2024").expect("date must parse"),
            time: TickTime::parse(at).expect("time must parse"),
            last_traded_qty: qty,
        }
    }

    #[test]
    fn accumulates_while_window_grows() {
        let series = rolling_series(&[
            tick("09:15:00", 10),
            tick("09:15:01", 20),
            tick("09:15:02", 30),
        ]);

        let sums: Vec<u64> = series.iter().map(|p| p.cumulative_volume).collect();
        assert_eq!(sums, vec![10, 30, 60]);
    }

    #[test]
    fn drops_ticks_before_market_open() {
        let series = rolling_series(&[
            tick("09:00:00", 999),
            tick("09:14:59", 999),
            tick("09:15:00", 10),
        ]);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].cumulative_volume, 10);
    }

    #[test]
    fn sorts_by_time_before_accumulating() {
        let series = rolling_series(&[tick("09:16:00", 20), tick("09:15:00", 10)]);

        assert_eq!(series[0].time, TickTime::parse("09:15:00").unwrap());
        assert_eq!(series[0].cumulative_volume, 10);
        assert_eq!(series[1].cumulative_volume, 30);
    }

    #[test]
    fn same_timestamp_ticks_keep_arrival_order() {
        let series = rolling_series(&[tick("09:15:00", 1), tick("09:15:00", 2)]);

        assert_eq!(series[0].last_traded_qty, 1);
        assert_eq!(series[1].last_traded_qty, 2);
    }

    #[test]
    fn window_slides_after_capacity() {
        // Window of 3600 ticks of qty 1, then one more: the sum stays at
        // 3600 because the oldest tick falls out.
        let ticks: Vec<IntradayTick> = (0..=WINDOW_TICKS)
            .map(|i| {
                let hour = 9 + (900 + i) / 3600;
                let minute = ((900 + i) % 3600) / 60;
                let second = (900 + i) % 60;
                tick(&format!("{hour:02}:{minute:02}:{second:02}"), 1)
            })
            .collect();

        let series = rolling_series(&ticks);
        assert_eq!(series.len(), WINDOW_TICKS + 1);
        assert_eq!(series[WINDOW_TICKS - 1].cumulative_volume, WINDOW_TICKS as u64);
        assert_eq!(series[WINDOW_TICKS].cumulative_volume, WINDOW_TICKS as u64);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(rolling_series(&[]).is_empty());
    }
}
