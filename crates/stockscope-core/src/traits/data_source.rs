//! Data source trait definitions.

use crate::error::DataError;
use crate::types::PriceBar;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for historical price data sources.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch historical bars.
    ///
    /// # Arguments
    /// * `ticker` - The symbol to fetch, case as given
    /// * `period` - Lookback window (e.g. `5d`, `3mo`, `1y`)
    /// * `interval` - Sampling granularity (e.g. `1d`, `1wk`)
    ///
    /// # Returns
    /// Bars ordered from oldest to newest. An unknown symbol or an empty
    /// range is an empty vector, not an error.
    async fn fetch(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Arc<T> {
    async fn fetch(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, DataError> {
        (**self).fetch(ticker, period, interval).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Box<T> {
    async fn fetch(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, DataError> {
        (**self).fetch(ticker, period, interval).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct OneBar;

    #[async_trait]
    impl DataSource for OneBar {
        async fn fetch(
            &self,
            ticker: &str,
            _period: &str,
            _interval: &str,
        ) -> Result<Vec<PriceBar>, DataError> {
            if ticker == "NONE" {
                return Ok(Vec::new());
            }
            let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
            Ok(vec![PriceBar::new(date, 1.0, 2.0, 0.5, 1.5, 100)])
        }

        fn name(&self) -> &str {
            "one-bar"
        }
    }

    #[tokio::test]
    async fn test_shared_source_delegates() {
        let boxed: Box<dyn DataSource> = Box::new(OneBar);
        let shared: Arc<dyn DataSource> = Arc::new(OneBar);

        assert_eq!(boxed.fetch("AAPL", "5d", "1d").await.unwrap().len(), 1);
        assert!(shared.fetch("NONE", "5d", "1d").await.unwrap().is_empty());
        assert_eq!(shared.name(), "one-bar");
    }
}
