//! First moment rolling volume exceeds the baseline.

use crate::{RollingPoint, TickTime};

/// Time of the first point whose cumulative volume strictly exceeds the
/// baseline.
///
/// A missing baseline falls back to a zero threshold, so any point with
/// positive cumulative volume qualifies. `None` means the baseline was never
/// exceeded that day, a normal outcome.
pub fn first_crossing(series: &[RollingPoint], baseline: Option<f64>) -> Option<TickTime> {
    let threshold = baseline.unwrap_or(0.0);

    series
        .iter()
        .find(|point| point.cumulative_volume as f64 > threshold)
        .map(|point| point.time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(at: &str, cumulative: u64) -> RollingPoint {
        RollingPoint {
            time: TickTime::parse(at).expect("time must parse"),
            last_traded_qty: 0,
            cumulative_volume: cumulative,
        }
    }

    #[test]
    fn finds_earliest_strict_exceedance() {
        let series = vec![
            point("09:15:00", 100),
            point("09:15:01", 150),
            point("09:15:02", 151),
            point("09:15:03", 200),
        ];

        let crossing = first_crossing(&series, Some(150.0));
        assert_eq!(crossing, Some(TickTime::parse("09:15:02").unwrap()));
    }

    #[test]
    fn equal_to_baseline_does_not_cross() {
        let series = vec![point("09:15:00", 150)];
        assert_eq!(first_crossing(&series, Some(150.0)), None);
    }

    #[test]
    fn absent_when_maximum_never_exceeds() {
        let series = vec![point("09:15:00", 10), point("09:15:01", 20)];
        assert_eq!(first_crossing(&series, Some(1_000.0)), None);
    }

    #[test]
    fn missing_baseline_crosses_at_first_positive_volume() {
        let series = vec![point("09:15:00", 0), point("09:15:01", 1)];
        let crossing = first_crossing(&series, None);
        assert_eq!(crossing, Some(TickTime::parse("09:15:01").unwrap()));
    }

    #[test]
    fn empty_series_never_crosses() {
        assert_eq!(first_crossing(&[], Some(10.0)), None);
        assert_eq!(first_crossing(&[], None), None);
    }
}
