//! Technical indicators used by the trend analysis.
//!
//! This crate provides straightforward implementations of:
//! - Simple moving average (SMA)
//! - Simple period-over-period returns
//! - Population standard deviation

pub mod moving_average;
pub mod returns;
pub mod volatility;

pub use moving_average::Sma;
pub use returns::SimpleReturns;
pub use volatility::population_std_dev;
