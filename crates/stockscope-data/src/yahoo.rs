//! Yahoo Finance chart API data source.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use stockscope_core::error::DataError;
use stockscope_core::traits::DataSource;
use stockscope_core::types::PriceBar;
use tracing::{debug, warn};

/// Chart API client settings.
#[derive(Debug, Clone)]
pub struct YahooConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 10,
            user_agent: format!("stockscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Chart API response types
#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Historical bars from the public chart endpoint.
///
/// Period and interval are passed through verbatim as the `range` and
/// `interval` query parameters.
pub struct YahooChartSource {
    config: YahooConfig,
    client: Client,
}

impl YahooChartSource {
    /// Create a new chart API client.
    pub fn new(config: YahooConfig) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DataError::Http(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn chart_url(&self, ticker: &str) -> String {
        format!(
            "{}/v8/finance/chart/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(ticker)
        )
    }
}

#[async_trait]
impl DataSource for YahooChartSource {
    async fn fetch(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, DataError> {
        let url = self.chart_url(ticker);
        debug!(ticker, period, interval, %url, "requesting chart");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("range", period),
                ("interval", interval),
                ("includePrePost", "false"),
            ])
            .send()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| DataError::Http(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            debug!(ticker, "chart endpoint reports unknown symbol");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(ticker, status = status.as_u16(), "chart request failed");
            return Err(DataError::Status {
                status: status.as_u16(),
                message: text,
            });
        }

        parse_chart(&text)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

fn cell(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}

/// Convert a chart response body into oldest-first bars.
fn parse_chart(body: &str) -> Result<Vec<PriceBar>, DataError> {
    let envelope: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| DataError::Parse(e.to_string()))?;

    if let Some(error) = envelope.chart.error {
        if error.code == "Not Found" {
            return Ok(Vec::new());
        }
        return Err(DataError::Parse(format!(
            "{}: {}",
            error.code,
            error.description.unwrap_or_default()
        )));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };

    let offset = result.meta.gmtoffset;
    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let mut bars = Vec::with_capacity(result.timestamp.len());
    for (i, ts) in result.timestamp.iter().enumerate() {
        let open = cell(&quote.open, i);
        let high = cell(&quote.high, i);
        let low = cell(&quote.low, i);
        let close = cell(&quote.close, i);

        // Placeholder rows for sessions without trades carry no prices at all.
        if open.is_none() && high.is_none() && low.is_none() && close.is_none() {
            continue;
        }

        let date = DateTime::from_timestamp(ts + offset, 0)
            .ok_or_else(|| DataError::Parse(format!("timestamp out of range: {}", ts)))?
            .date_naive();
        let volume = cell(&quote.volume, i)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0);

        bars.push(PriceBar::new(
            date,
            open.unwrap_or(f64::NAN),
            high.unwrap_or(f64::NAN),
            low.unwrap_or(f64::NAN),
            close.unwrap_or(f64::NAN),
            volume,
        ));
    }

    bars.sort_by_key(|b| b.date);
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const CHART: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL", "gmtoffset": -14400},
                "timestamp": [1717421400, 1717507800, 1717594200],
                "indicators": {
                    "quote": [{
                        "open":   [192.9, 194.6, null],
                        "high":   [194.99, 195.32, null],
                        "low":    [192.52, 193.03, null],
                        "close":  [194.03, 194.35, null],
                        "volume": [50080500, 47471400, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_chart_drops_empty_rows() {
        let bars = parse_chart(CHART).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(bars[0].open, 192.9);
        assert_eq!(bars[1].close, 194.35);
        assert_eq!(bars[1].volume, 47_471_400);
    }

    #[test]
    fn test_parse_chart_keeps_partial_rows_as_nan() {
        let body = r#"{"chart": {"result": [{
            "meta": {"gmtoffset": 0},
            "timestamp": [1717421400],
            "indicators": {"quote": [{
                "open": [1.0], "high": [2.0], "low": [0.5], "close": [null], "volume": [10]
            }]}
        }], "error": null}}"#;
        let bars = parse_chart(body).unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].non_finite_field(), Some("close"));
    }

    #[test]
    fn test_parse_chart_not_found_is_empty() {
        let body = r#"{"chart": {"result": null, "error": {
            "code": "Not Found", "description": "No data found, symbol may be delisted"
        }}}"#;

        assert!(parse_chart(body).unwrap().is_empty());
    }

    #[test]
    fn test_parse_chart_reports_other_errors() {
        let body = r#"{"chart": {"result": null, "error": {
            "code": "Bad Request", "description": "Invalid input - interval=7m is not supported"
        }}}"#;

        let err = parse_chart(body).unwrap_err();
        assert!(err.to_string().contains("interval=7m"));
    }

    #[test]
    fn test_parse_chart_without_timestamps() {
        let body = r#"{"chart": {"result": [{
            "meta": {"gmtoffset": 0},
            "indicators": {"quote": [{}]}
        }], "error": null}}"#;

        assert!(parse_chart(body).unwrap().is_empty());
    }

    #[test]
    fn test_chart_url_encodes_ticker() {
        let source = YahooChartSource::new(YahooConfig {
            base_url: "https://example.test/".to_string(),
            ..YahooConfig::default()
        })
        .unwrap();

        assert_eq!(
            source.chart_url("^GSPC"),
            "https://example.test/v8/finance/chart/%5EGSPC"
        );
    }
}
