//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stockscope".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional log file; logs go to stderr only when unset
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Which price data backend to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    #[default]
    Yahoo,
    Csv,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceKind::Yahoo => f.write_str("yahoo"),
            DataSourceKind::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for DataSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yahoo" => Ok(DataSourceKind::Yahoo),
            "csv" => Ok(DataSourceKind::Csv),
            other => Err(format!("unknown data source '{}' (expected yahoo or csv)", other)),
        }
    }
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataSettings {
    pub source: DataSourceKind,
    /// Directory of `{TICKER}.csv` files, required for the csv source
    pub csv_dir: Option<PathBuf>,
    pub yahoo_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: DataSourceKind::Yahoo,
            csv_dir: None,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 10,
            user_agent: "stockscope".to_string(),
        }
    }
}

/// Default analysis parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    pub period: String,
    pub interval: String,
    pub history_limit: usize,
    pub short_window: usize,
    pub long_window: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            period: "3mo".to_string(),
            interval: "1d".to_string(),
            history_limit: 60,
            short_window: 20,
            long_window: 50,
        }
    }
}
