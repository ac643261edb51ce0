//! Configuration management.
//!
//! Settings come from an optional TOML file layered with `STOCKSCOPE__`
//! environment variables, e.g. `STOCKSCOPE__DATA__SOURCE=csv` or
//! `STOCKSCOPE__ANALYSIS__SHORT_WINDOW=10`.

mod settings;

pub use settings::{
    AnalysisSettings, AppConfig, AppSettings, DataSettings, DataSourceKind, LoggingConfig,
};

use config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;

/// File read when no explicit path is given. Missing is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Load configuration from file and environment.
///
/// An explicit `path` must exist; without one the default path is tried and
/// built-in defaults apply when it is absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix("STOCKSCOPE")
        .separator("__")
        .try_parsing(true)
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false),
    };

    let config: AppConfig = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()?;

    config.validate()?;
    Ok(config)
}

impl AppConfig {
    /// Reject settings no command could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let analysis = &self.analysis;
        for (name, value) in [
            ("analysis.history_limit", analysis.history_limit),
            ("analysis.short_window", analysis.short_window),
            ("analysis.long_window", analysis.long_window),
        ] {
            if value == 0 {
                return Err(invalid(format!("{} must be greater than 0", name)));
            }
        }
        if analysis.period.trim().is_empty() {
            return Err(invalid("analysis.period must not be empty"));
        }
        if analysis.interval.trim().is_empty() {
            return Err(invalid("analysis.interval must not be empty"));
        }

        if self.data.timeout_secs == 0 {
            return Err(invalid("data.timeout_secs must be greater than 0"));
        }
        if self.data.source == DataSourceKind::Csv && self.data.csv_dir.is_none() {
            return Err(invalid("data.csv_dir is required when data.source = \"csv\""));
        }

        match self.logging.format.to_lowercase().as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Message(message.into())
}
