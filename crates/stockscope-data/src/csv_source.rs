//! CSV data source.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use stockscope_core::error::DataError;
use stockscope_core::traits::DataSource;
use stockscope_core::types::{Interval, Lookback, PriceBar};
use tracing::debug;

use crate::resample::resample;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: Option<f64>,
    #[serde(alias = "High", alias = "high")]
    high: Option<f64>,
    #[serde(alias = "Low", alias = "low")]
    low: Option<f64>,
    #[serde(alias = "Close", alias = "close")]
    close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: Option<f64>,
}

/// Daily OHLCV history stored as one CSV file per ticker.
///
/// Files are looked up as `{TICKER}.csv`, `{ticker}.csv`, `{TICKER}_daily.csv`
/// or `{ticker}_daily.csv` inside the data directory. Empty price cells are
/// kept as NaN so callers can decide which fields they need.
pub struct CsvDataSource {
    dir: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source over a directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(DataError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("data directory {} does not exist", dir.display()),
            )));
        }
        Ok(Self { dir })
    }

    /// Locate the file holding a ticker's history.
    fn file_for(&self, ticker: &str) -> Option<PathBuf> {
        let lower = ticker.to_lowercase();
        [
            format!("{}.csv", ticker),
            format!("{}.csv", lower),
            format!("{}_daily.csv", ticker),
            format!("{}_daily.csv", lower),
        ]
        .into_iter()
        .map(|name| self.dir.join(name))
        .find(|path| path.is_file())
    }

    /// Load bars from a specific path.
    fn load_from_path(&self, path: &Path) -> Result<Vec<PriceBar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DataError::Parse(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;
            let date = parse_date(&record.date)?;

            bars.push(PriceBar::new(
                date,
                record.open.unwrap_or(f64::NAN),
                record.high.unwrap_or(f64::NAN),
                record.low.unwrap_or(f64::NAN),
                record.close.unwrap_or(f64::NAN),
                volume_from(record.volume),
            ));
        }

        // Sort by date
        bars.sort_by_key(|b| b.date);

        Ok(bars)
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn fetch(
        &self,
        ticker: &str,
        period: &str,
        interval: &str,
    ) -> Result<Vec<PriceBar>, DataError> {
        let lookback: Lookback = period.parse().map_err(DataError::InvalidPeriod)?;
        let interval: Interval = interval.parse().map_err(DataError::UnsupportedInterval)?;
        if interval.is_intraday() {
            return Err(DataError::UnsupportedInterval(format!(
                "{}: csv files hold daily bars",
                interval
            )));
        }

        if !is_safe_ticker(ticker) {
            return Err(DataError::InvalidTicker(ticker.to_string()));
        }

        let Some(path) = self.file_for(ticker) else {
            debug!(ticker, dir = %self.dir.display(), "no csv file for ticker");
            return Ok(Vec::new());
        };

        let bars = self.load_from_path(&path)?;
        let selected = lookback.select(&bars).to_vec();
        debug!(
            ticker,
            path = %path.display(),
            loaded = bars.len(),
            selected = selected.len(),
            "loaded csv history"
        );

        resample(selected, interval)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// A ticker must name a file inside the data directory.
fn is_safe_ticker(ticker: &str) -> bool {
    !ticker.contains(['/', '\\', '\0']) && !ticker.contains("..")
}

/// Convert an optional volume cell to a share count.
///
/// Missing, negative or non-finite volumes count as zero.
fn volume_from(raw: Option<f64>) -> u64 {
    match raw {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

/// Parse various date formats into a calendar date.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y", "%d-%m-%Y"];
    for format in formats {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    for format in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.date_naive());
    }

    // Unix timestamp, milliseconds if more than 10 digits
    if date_str.len() < 9 {
        return Err(DataError::Parse(format!("Could not parse date: {}", date_str)));
    }
    if let Ok(ts) = date_str.parse::<i64>() {
        let parsed = if ts > 10_000_000_000 {
            DateTime::from_timestamp_millis(ts)
        } else {
            DateTime::from_timestamp(ts, 0)
        };
        if let Some(dt) = parsed {
            return Ok(dt.date_naive());
        }
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}
