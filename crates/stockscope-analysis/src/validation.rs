//! Argument and fetch validation shared by the analysis functions.

use stockscope_core::error::{AnalysisError, DataError};
use stockscope_core::types::PriceBar;

/// Reject an empty or whitespace-only ticker.
pub(crate) fn require_ticker(ticker: &str) -> Result<(), AnalysisError> {
    if ticker.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "ticker must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject a zero count argument such as a limit or window.
pub(crate) fn require_positive(name: &str, value: usize) -> Result<(), AnalysisError> {
    if value == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "{} must be a positive integer",
            name
        )));
    }
    Ok(())
}

/// Turn an empty fetch into `NoData`.
pub(crate) fn require_bars(ticker: &str, bars: Vec<PriceBar>) -> Result<Vec<PriceBar>, AnalysisError> {
    if bars.is_empty() {
        return Err(AnalysisError::NoData {
            ticker: ticker.to_string(),
        });
    }
    Ok(bars)
}

/// Check that every price field of the given bars is finite.
pub(crate) fn require_finite_prices(bars: &[PriceBar]) -> Result<(), AnalysisError> {
    match bars.iter().find_map(|b| b.non_finite_field().map(|f| (b.date, f))) {
        Some((date, field)) => Err(DataError::MalformedBar { date, field }.into()),
        None => Ok(()),
    }
}

/// Check that every close is finite.
pub(crate) fn require_finite_closes(bars: &[PriceBar]) -> Result<(), AnalysisError> {
    match bars.iter().find(|b| !b.close.is_finite()) {
        Some(bar) => Err(DataError::MalformedBar {
            date: bar.date,
            field: "close",
        }
        .into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        PriceBar::new(date, 1.0, 1.0, 1.0, close, 1)
    }

    #[test]
    fn test_require_ticker() {
        assert!(require_ticker("AAPL").is_ok());
        assert!(matches!(require_ticker(""), Err(AnalysisError::InvalidInput(_))));
        assert!(matches!(require_ticker(" \t\n"), Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_require_positive_names_argument() {
        assert!(require_positive("limit", 1).is_ok());
        let err = require_positive("limit", 0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: limit must be a positive integer");
    }

    #[test]
    fn test_require_bars() {
        assert!(matches!(
            require_bars("XYZ", Vec::new()),
            Err(AnalysisError::NoData { ticker }) if ticker == "XYZ"
        ));
        assert_eq!(require_bars("XYZ", vec![bar(1.0)]).unwrap().len(), 1);
    }

    #[test]
    fn test_non_finite_values_are_data_source_errors() {
        let bars = vec![bar(1.0), bar(f64::NAN)];

        assert!(matches!(
            require_finite_closes(&bars),
            Err(AnalysisError::DataSource(DataError::MalformedBar { field: "close", .. }))
        ));
        assert!(require_finite_prices(&bars).is_err());
        assert!(require_finite_prices(&bars[..1]).is_ok());
    }
}
