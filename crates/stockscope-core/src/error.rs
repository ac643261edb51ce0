//! Error types for stockscope.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by the quote, history and trend functions.
///
/// Every variant is raised at the point of detection; nothing is downgraded
/// or retried inside the analysis layer.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No data available for {ticker}")]
    NoData { ticker: String },

    #[error(
        "Insufficient data: {available} bars available, moving averages need {short_window} / {long_window}"
    )]
    InsufficientData {
        available: usize,
        short_window: usize,
        long_window: usize,
    },

    #[error("Data source error: {0}")]
    DataSource(#[from] DataError),
}

impl AnalysisError {
    /// Whether the caller can fix the request and try again.
    pub fn is_caller_correctable(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidInput(_) | AnalysisError::InsufficientData { .. }
        )
    }
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Bar dated {date} has a missing or non-finite {field}")]
    MalformedBar { date: NaiveDate, field: &'static str },

    #[error("Unsupported interval: {0}")]
    UnsupportedInterval(String),

    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
