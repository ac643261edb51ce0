//! CLI definitions.

pub mod commands;
pub mod source;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockscope_config::DataSourceKind;

#[derive(Parser)]
#[command(name = "stockscope")]
#[command(author, version, about = "Stock quotes, price history and trend analysis")]
pub struct Cli {
    /// Configuration file path (defaults to config/default.toml when present)
    #[arg(short, long, env = "STOCKSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (overrides logging.level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Price data source (overrides data.source)
    #[arg(long)]
    pub source: Option<DataSourceKind>,

    /// Directory of per-ticker CSV files (overrides data.csv_dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the most recent price for a ticker
    Quote(QuoteArgs),
    /// Show recent daily price history
    History(HistoryArgs),
    /// Compare moving averages and estimate volatility
    Analyze(AnalyzeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Ticker symbol, e.g. AAPL
    pub ticker: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Ticker symbol, e.g. AAPL
    pub ticker: String,

    /// Lookback window such as 1mo, 3mo, 1y (overrides analysis.period)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Bar interval such as 1d, 1wk (overrides analysis.interval)
    #[arg(short, long)]
    pub interval: Option<String>,

    /// Maximum number of bars to show (overrides analysis.history_limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Ticker symbol, e.g. AAPL
    pub ticker: String,

    /// Lookback window (overrides analysis.period)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Bar interval (overrides analysis.interval)
    #[arg(short, long)]
    pub interval: Option<String>,

    /// Short moving-average window (overrides analysis.short_window)
    #[arg(long)]
    pub short_window: Option<usize>,

    /// Long moving-average window (overrides analysis.long_window)
    #[arg(long)]
    pub long_window: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}
