//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sampled observation for a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Calendar date of the bar
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Name of the first price field that is NaN or infinite, if any.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }

    /// The bar's date as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Extract close prices as a vector, oldest first.
pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// The last `n` bars, keeping their order.
pub fn last_n(bars: &[PriceBar], n: usize) -> &[PriceBar] {
    let start = bars.len().saturating_sub(n);
    &bars[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_bar_iso_date() {
        let bar = PriceBar::new(day(5), 100.0, 110.0, 95.0, 105.0, 1_000_000);

        assert_eq!(bar.iso_date(), "2024-03-05");
    }

    #[test]
    fn test_non_finite_field() {
        let good = PriceBar::new(day(1), 1.0, 2.0, 0.5, 1.5, 10);
        assert_eq!(good.non_finite_field(), None);

        let bad_close = PriceBar { close: f64::NAN, ..good };
        assert_eq!(bad_close.non_finite_field(), Some("close"));

        let bad_high = PriceBar { high: f64::INFINITY, ..good };
        assert_eq!(bad_high.non_finite_field(), Some("high"));
    }

    #[test]
    fn test_series_helpers() {
        let bars: Vec<PriceBar> = (1..=4)
            .map(|d| PriceBar::new(day(d), 1.0, 1.0, 1.0, d as f64, 0))
            .collect();

        assert_eq!(closes(&bars), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(last_n(&bars, 2).len(), 2);
        assert_eq!(last_n(&bars, 2)[0].date, day(3));
        assert_eq!(last_n(&bars, 10).len(), 4);
        assert!(last_n(&bars, 0).is_empty());
    }
}
