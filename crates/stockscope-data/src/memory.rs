//! In-memory data source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use stockscope_core::error::DataError;
use stockscope_core::traits::DataSource;
use stockscope_core::types::PriceBar;

/// Fixed per-ticker series held in memory.
///
/// Every fetch returns the whole stored series regardless of period and
/// interval, and is counted so callers can check how often the source was hit.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    series: HashMap<String, Vec<PriceBar>>,
    fetches: AtomicUsize,
}

impl InMemoryDataSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the series for a ticker.
    pub fn with_series(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.series.insert(ticker.to_string(), bars);
        self
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for InMemoryDataSource {
    async fn fetch(
        &self,
        ticker: &str,
        _period: &str,
        _interval: &str,
    ) -> Result<Vec<PriceBar>, DataError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.series.get(ticker).cloned().unwrap_or_default())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
