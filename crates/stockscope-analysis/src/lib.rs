//! Quote, history and trend analysis.
//!
//! Each function validates its arguments, performs exactly one fetch from the
//! injected [`DataSource`], and computes its report in memory. Nothing is
//! cached between calls and nothing is logged here; callers decide how to
//! surface results and errors.
//!
//! [`DataSource`]: stockscope_core::traits::DataSource

mod history;
mod quote;
mod trend;
mod validation;

pub use history::{price_history, HistoryRequest, DEFAULT_HISTORY_LIMIT};
pub use quote::{recent_price, QUOTE_INTERVAL, QUOTE_PERIOD};
pub use trend::{
    analyze_trend, TrendRequest, DEFAULT_LONG_WINDOW, DEFAULT_SHORT_WINDOW, METHODOLOGY_NOTE,
};

/// Default lookback for history and trend requests.
pub const DEFAULT_PERIOD: &str = "3mo";
/// Default sampling interval for history and trend requests.
pub const DEFAULT_INTERVAL: &str = "1d";
