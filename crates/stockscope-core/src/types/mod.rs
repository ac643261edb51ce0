//! Core data types for stockscope.

mod interval;
mod lookback;
mod ohlcv;
mod report;

pub use interval::Interval;
pub use lookback::Lookback;
pub use ohlcv::{closes, last_n, PriceBar};
pub use report::{HistoryPoint, HistoryReport, QuoteReport, Trend, TrendReport};
