//! Stockscope CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use stockscope_config::{load_config, AppConfig, DataSourceKind};
use stockscope_core::error::AnalysisError;
use stockscope_monitor::{setup_logging, LogOptions};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

/// 2 when the request itself was wrong and can be corrected, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AnalysisError>() {
        Some(e) if e.is_caller_correctable() => 2,
        _ => 1,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let _log_guard = setup_logging(&LogOptions {
        level: cli
            .log_level
            .map(|l| l.as_str().to_string())
            .unwrap_or_else(|| config.logging.level.clone()),
        json: cli.json_logs || config.logging.is_json(),
        file: config.logging.file.clone(),
    })
    .context("Failed to set up logging")?;
    debug!(environment = %config.app.environment, "configuration loaded");

    // Execute command
    match cli.command {
        Commands::Quote(args) => {
            let source = cli::source::build_source(&config)?;
            cli::commands::quote::run(args, source.as_ref()).await
        }
        Commands::History(args) => {
            let source = cli::source::build_source(&config)?;
            cli::commands::history::run(args, &config.analysis, source.as_ref()).await
        }
        Commands::Analyze(args) => {
            let source = cli::source::build_source(&config)?;
            cli::commands::analyze::run(args, &config.analysis, source.as_ref()).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(&config).await,
    }
}

/// Command-line flags win over file and environment settings.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(dir) = &cli.data_dir {
        config.data.csv_dir = Some(dir.clone());
        // A data directory alone implies the csv source.
        if cli.source.is_none() {
            config.data.source = DataSourceKind::Csv;
        }
    }
    if let Some(source) = cli.source {
        config.data.source = source;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockscope_core::error::DataError;

    #[test]
    fn test_exit_code_distinguishes_bad_requests() {
        let bad_window = anyhow::Error::new(AnalysisError::InsufficientData {
            available: 30,
            short_window: 20,
            long_window: 50,
        })
        .context("Failed to analyze AAPL");
        assert_eq!(exit_code(&bad_window), 2);

        let blank = anyhow::Error::new(AnalysisError::InvalidInput("ticker".into()));
        assert_eq!(exit_code(&blank), 2);

        let upstream = anyhow::Error::new(AnalysisError::from(DataError::Http("timeout".into())))
            .context("Failed to get a quote for AAPL");
        assert_eq!(exit_code(&upstream), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("config missing")), 1);
    }
}
