//! Data source construction from configuration.

use anyhow::{Context, Result};
use stockscope_config::{AppConfig, DataSourceKind};
use stockscope_core::traits::DataSource;
use stockscope_data::{CsvDataSource, YahooChartSource, YahooConfig};
use tracing::debug;

/// Build the configured data source.
pub fn build_source(config: &AppConfig) -> Result<Box<dyn DataSource>> {
    let data = &config.data;
    let source: Box<dyn DataSource> = match data.source {
        DataSourceKind::Yahoo => {
            let yahoo = YahooConfig {
                base_url: data.yahoo_base_url.clone(),
                timeout_secs: data.timeout_secs,
                user_agent: data.user_agent.clone(),
            };
            Box::new(YahooChartSource::new(yahoo).context("Failed to create HTTP client")?)
        }
        DataSourceKind::Csv => {
            let dir = data
                .csv_dir
                .as_ref()
                .context("data.csv_dir must be set for the csv source (or pass --data-dir)")?;
            Box::new(
                CsvDataSource::new(dir)
                    .with_context(|| format!("Cannot open data directory {}", dir.display()))?,
            )
        }
    };

    debug!(source = source.name(), "data source ready");
    Ok(source)
}
