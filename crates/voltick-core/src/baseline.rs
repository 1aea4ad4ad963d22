//! Trailing average daily volume.

use crate::{DailyTable, Symbol, TradingDate};

/// Number of most recent trading days averaged into a baseline.
pub const BASELINE_WINDOW_DAYS: usize = 30;

/// Average traded volume over the up-to-30 most recent trading days
/// strictly before `reference_date`.
///
/// Returns `None` when the stock has no daily history before that date
/// (including unknown stocks, which are not a hard error). Callers treat
/// `None` as a zero threshold when scanning for crossings, so a stock with
/// no history flags its first positive-volume tick.
pub fn baseline(
    daily: &DailyTable,
    symbol: &Symbol,
    reference_date: TradingDate,
) -> Option<f64> {
    let mut prior: Vec<_> = daily
        .records_for(symbol)
        .iter()
        .filter(|record| record.date < reference_date)
        .collect();
    if prior.is_empty() {
        return None;
    }

    prior.sort_by(|a, b| b.date.cmp(&a.date));

    let window = &prior[..prior.len().min(BASELINE_WINDOW_DAYS)];
    let total: u64 = window.iter().map(|record| record.volume).sum();
    Some(total as f64 / window.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DailyRecord;

    fn symbol(name: &str) -> Symbol {
        Symbol::parse(name).expect("symbol must parse")
    }

    fn date(day: u8) -> TradingDate {
        TradingDate::parse(&format!("{day:02}-03-2024")).expect("date must parse")
    }

    fn table(volumes: &[(u8, u64)]) -> DailyTable {
        DailyTable::new(
            volumes
                .iter()
                .map(|&(day, volume)| DailyRecord {
                    symbol: symbol("ABC"),
                    date: date(day),
                    volume,
                })
                .collect(),
        )
    }

    #[test]
    fn averages_all_records_when_fewer_than_window() {
        let daily = table(&[(1, 100), (2, 200), (3, 300)]);
        let value = baseline(&daily, &symbol("ABC"), date(10)).expect("baseline exists");
        assert_eq!(value, 200.0);
    }

    #[test]
    fn takes_only_the_most_recent_window() {
        // 31 days of volume 10, except the most recent 30 carry volume 20.
        let mut volumes: Vec<(u8, u64)> = vec![(1, 10)];
        volumes.extend((2..=31).map(|day| (day, 20)));
        let daily = table(&volumes);

        // Window is days 2..=31; the day-1 record must be excluded.
        let value = baseline(&daily, &symbol("ABC"), TradingDate::parse("01-04-2024").unwrap())
            .expect("baseline exists");
        assert_eq!(value, 20.0);
    }

    #[test]
    fn excludes_the_reference_date_itself() {
        let daily = table(&[(1, 100), (2, 900)]);
        let value = baseline(&daily, &symbol("ABC"), date(2)).expect("baseline exists");
        assert_eq!(value, 100.0);
    }

    #[test]
    fn insensitive_to_record_order() {
        let forward = table(&[(1, 100), (2, 200), (3, 300)]);
        let backward = table(&[(3, 300), (2, 200), (1, 100)]);
        assert_eq!(
            baseline(&forward, &symbol("ABC"), date(10)),
            baseline(&backward, &symbol("ABC"), date(10)),
        );
    }

    #[test]
    fn no_prior_history_yields_none() {
        let daily = table(&[(5, 100)]);
        assert_eq!(baseline(&daily, &symbol("ABC"), date(5)), None);
        assert_eq!(baseline(&daily, &symbol("ABC"), date(1)), None);
    }

    #[test]
    fn unknown_stock_yields_none_not_a_panic() {
        let daily = table(&[(1, 100)]);
        assert_eq!(baseline(&daily, &symbol("XYZ"), date(10)), None);
    }
}
