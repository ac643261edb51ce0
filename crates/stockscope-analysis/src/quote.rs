//! Most recent price for a ticker.

use stockscope_core::error::AnalysisResult;
use stockscope_core::traits::DataSource;
use stockscope_core::types::{last_n, QuoteReport};

use crate::validation::{require_bars, require_finite_prices, require_ticker};

/// Lookback used for quote fetches.
pub const QUOTE_PERIOD: &str = "5d";
/// Interval used for quote fetches.
pub const QUOTE_INTERVAL: &str = "1d";

/// Latest available bar for `ticker`, flattened into a quote.
///
/// The bar is the last one in a short daily fetch, so on weekends and
/// holidays it belongs to the previous trading session.
pub async fn recent_price<S>(source: &S, ticker: &str) -> AnalysisResult<QuoteReport>
where
    S: DataSource + ?Sized,
{
    require_ticker(ticker)?;

    let bars = source.fetch(ticker, QUOTE_PERIOD, QUOTE_INTERVAL).await?;
    let bars = require_bars(ticker, bars)?;
    let latest = last_n(&bars, 1);
    require_finite_prices(latest)?;

    Ok(QuoteReport::from_bar(ticker, &latest[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{bars_from_closes, FailingSource};
    use chrono::NaiveDate;
    use stockscope_core::error::{AnalysisError, DataError};
    use stockscope_core::types::PriceBar;
    use stockscope_data::InMemoryDataSource;

    #[tokio::test]
    async fn test_quote_uses_last_bar() {
        let mut bars = bars_from_closes(&[10.0, 11.0, 12.0]);
        bars[2] = PriceBar::new(bars[2].date, 11.5, 12.5, 11.25, 12.0, 4_200);
        let source = InMemoryDataSource::new().with_series("AAPL", bars);

        let quote = recent_price(&source, "AAPL").await.unwrap();

        assert_eq!(quote.ticker, "AAPL");
        assert_eq!(quote.last_close, 12.0);
        assert_eq!(quote.open, 11.5);
        assert_eq!(quote.high, 12.5);
        assert_eq!(quote.low, 11.25);
        assert_eq!(quote.volume, 4_200);
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_quote_single_bar_fields_are_exact() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        let bar = PriceBar::new(date, 196.9, 196.94, 194.14, 196.89, 53_103_900);
        let source = InMemoryDataSource::new().with_series("AAPL", vec![bar]);

        let quote = recent_price(&source, "AAPL").await.unwrap();
        assert_eq!(quote, QuoteReport::from_bar("AAPL", &bar));
    }

    #[tokio::test]
    async fn test_quote_keeps_ticker_case() {
        let source = InMemoryDataSource::new().with_series("brk-b", bars_from_closes(&[1.0]));

        let quote = recent_price(&source, "brk-b").await.unwrap();
        assert_eq!(quote.ticker, "brk-b");
    }

    #[tokio::test]
    async fn test_quote_blank_ticker_skips_fetch() {
        let source = InMemoryDataSource::new();

        for ticker in ["", "   "] {
            assert!(matches!(
                recent_price(&source, ticker).await,
                Err(AnalysisError::InvalidInput(_))
            ));
        }
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_quote_empty_fetch_is_no_data() {
        let source = InMemoryDataSource::new();

        let err = recent_price(&source, "ZZZZ").await.unwrap_err();
        assert!(matches!(err, AnalysisError::NoData { ref ticker } if ticker == "ZZZZ"));
    }

    #[tokio::test]
    async fn test_quote_nan_in_last_bar_is_rejected() {
        let mut bars = bars_from_closes(&[10.0, 11.0]);
        bars[1].high = f64::NAN;
        let source = InMemoryDataSource::new().with_series("AAPL", bars);

        assert!(matches!(
            recent_price(&source, "AAPL").await,
            Err(AnalysisError::DataSource(DataError::MalformedBar { field: "high", .. }))
        ));
    }

    #[tokio::test]
    async fn test_quote_propagates_source_failure() {
        let err = recent_price(&FailingSource, "AAPL").await.unwrap_err();

        assert!(matches!(err, AnalysisError::DataSource(DataError::Http(_))));
        assert!(err.to_string().contains("connection refused"));
    }
}
