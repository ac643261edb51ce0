//! Validate configuration command.

use anyhow::{Context, Result};
use stockscope_config::AppConfig;

/// Print the effective configuration. Loading already validated it.
pub async fn run(config: &AppConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render configuration")?;

    println!("Configuration is valid!");
    println!();
    println!("App: {} ({})", config.app.name, config.app.environment);
    println!("Data source: {}", config.data.source);
    println!();
    print!("{}", rendered);
    Ok(())
}
