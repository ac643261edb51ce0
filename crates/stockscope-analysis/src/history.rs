//! Recent price history for a ticker.

use stockscope_core::error::AnalysisResult;
use stockscope_core::traits::DataSource;
use stockscope_core::types::{last_n, HistoryPoint, HistoryReport};

use crate::validation::{require_bars, require_finite_prices, require_positive, require_ticker};
use crate::{DEFAULT_INTERVAL, DEFAULT_PERIOD};

/// Default maximum number of points in a history report.
pub const DEFAULT_HISTORY_LIMIT: usize = 60;

/// Parameters of a history request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    /// Lookback window passed to the data source
    pub period: String,
    /// Sampling interval passed to the data source
    pub interval: String,
    /// Maximum number of points returned
    pub limit: usize,
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Up to `limit` most recent bars for `ticker`, oldest first.
pub async fn price_history<S>(
    source: &S,
    ticker: &str,
    request: &HistoryRequest,
) -> AnalysisResult<HistoryReport>
where
    S: DataSource + ?Sized,
{
    require_ticker(ticker)?;
    require_positive("limit", request.limit)?;

    let bars = source
        .fetch(ticker, &request.period, &request.interval)
        .await?;
    let bars = require_bars(ticker, bars)?;

    let recent = last_n(&bars, request.limit);
    require_finite_prices(recent)?;

    Ok(HistoryReport {
        ticker: ticker.to_string(),
        period: request.period.clone(),
        interval: request.interval.clone(),
        points: recent.iter().map(HistoryPoint::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::bars_from_closes;
    use stockscope_core::error::{AnalysisError, DataError};
    use stockscope_data::InMemoryDataSource;

    fn request(limit: usize) -> HistoryRequest {
        HistoryRequest {
            limit,
            ..HistoryRequest::default()
        }
    }

    #[test]
    fn test_default_request() {
        let req = HistoryRequest::default();
        assert_eq!(req.period, "3mo");
        assert_eq!(req.interval, "1d");
        assert_eq!(req.limit, 60);
    }

    #[tokio::test]
    async fn test_history_returns_contiguous_suffix() {
        let closes: Vec<f64> = (1..=10).map(f64::from).collect();
        let source = InMemoryDataSource::new().with_series("MSFT", bars_from_closes(&closes));

        let report = price_history(&source, "MSFT", &request(4)).await.unwrap();

        let got: Vec<f64> = report.points.iter().map(|p| p.close).collect();
        assert_eq!(got, vec![7.0, 8.0, 9.0, 10.0]);
        assert_eq!(report.points[0].date, "2024-01-07");
        assert_eq!(report.points[3].date, "2024-01-10");
    }

    #[tokio::test]
    async fn test_history_limit_larger_than_series() {
        let source = InMemoryDataSource::new().with_series("MSFT", bars_from_closes(&[1.0, 2.0]));

        let report = price_history(&source, "MSFT", &request(60)).await.unwrap();
        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].close, 1.0);
    }

    #[tokio::test]
    async fn test_history_never_exceeds_limit() {
        let closes: Vec<f64> = (1..=30).map(f64::from).collect();
        let source = InMemoryDataSource::new().with_series("MSFT", bars_from_closes(&closes));

        for limit in 1..=35 {
            let report = price_history(&source, "MSFT", &request(limit)).await.unwrap();
            assert_eq!(report.points.len(), limit.min(30));
            assert_eq!(report.points.last().unwrap().close, 30.0);
        }
    }

    #[tokio::test]
    async fn test_history_echoes_request() {
        let source = InMemoryDataSource::new().with_series("MSFT", bars_from_closes(&[1.0]));
        let req = HistoryRequest {
            period: "1y".to_string(),
            interval: "1wk".to_string(),
            limit: 10,
        };

        let report = price_history(&source, "MSFT", &req).await.unwrap();
        assert_eq!(report.ticker, "MSFT");
        assert_eq!(report.period, "1y");
        assert_eq!(report.interval, "1wk");
    }

    #[tokio::test]
    async fn test_history_empty_fetch_is_no_data() {
        let source = InMemoryDataSource::new();

        let err = price_history(&source, "ZZZZ", &HistoryRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::NoData { ref ticker } if ticker == "ZZZZ"));
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_history_zero_limit_is_invalid() {
        let source = InMemoryDataSource::new().with_series("MSFT", bars_from_closes(&[1.0]));

        assert!(matches!(
            price_history(&source, "MSFT", &request(0)).await,
            Err(AnalysisError::InvalidInput(_))
        ));
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_history_ignores_bad_values_outside_limit() {
        let mut bars = bars_from_closes(&[1.0, 2.0, 3.0]);
        bars[0].close = f64::NAN;
        let source = InMemoryDataSource::new().with_series("MSFT", bars);

        assert!(price_history(&source, "MSFT", &request(2)).await.is_ok());
        assert!(matches!(
            price_history(&source, "MSFT", &request(3)).await,
            Err(AnalysisError::DataSource(DataError::MalformedBar { .. }))
        ));
    }
}
