//! Records returned by the quote, history and trend functions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriceBar;

/// Flattened view of the most recent bar for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub ticker: String,
    pub last_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

impl QuoteReport {
    /// Build a quote from a bar.
    pub fn from_bar(ticker: &str, bar: &PriceBar) -> Self {
        Self {
            ticker: ticker.to_string(),
            last_close: bar.close,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            volume: bar.volume,
        }
    }
}

/// One point of a history report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// ISO calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl From<&PriceBar> for HistoryPoint {
    fn from(bar: &PriceBar) -> Self {
        Self {
            date: bar.iso_date(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}

/// Most recent bars of a fetch, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryReport {
    pub ticker: String,
    pub period: String,
    pub interval: String,
    pub points: Vec<HistoryPoint>,
}

/// Trend classification from the moving-average relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    #[serde(rename = "short-term uptrend")]
    Uptrend,
    #[serde(rename = "short-term downtrend")]
    Downtrend,
    #[serde(rename = "sideways")]
    Sideways,
}

impl Trend {
    /// Classify by strict comparison of the two averages.
    ///
    /// Equality is exact. Averages that differ only by floating-point noise
    /// can flip between labels when upstream data changes by a cent.
    pub fn classify(ma_short: f64, ma_long: f64) -> Self {
        if ma_short > ma_long {
            Trend::Uptrend
        } else if ma_short < ma_long {
            Trend::Downtrend
        } else {
            Trend::Sideways
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Uptrend => "short-term uptrend",
            Trend::Downtrend => "short-term downtrend",
            Trend::Sideways => "sideways",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Moving averages, trend and volatility for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub ticker: String,
    pub period: String,
    pub last_close: f64,
    pub ma_short: f64,
    pub ma_long: f64,
    pub trend: Trend,
    pub volatility_estimate: f64,
    pub note: String,
}
