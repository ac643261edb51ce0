//! Core types and traits for stockscope.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceBar, Interval, Lookback)
//! - Result records returned by the analysis functions
//! - Core traits for data sources and indicators
//! - The error taxonomy shared across the workspace

pub mod types;
pub mod traits;
pub mod error;

pub use error::{AnalysisError, AnalysisResult, DataError, IndicatorError};
pub use types::*;
pub use traits::*;
