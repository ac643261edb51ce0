//! CLI command implementations.

pub mod analyze;
pub mod history;
pub mod quote;
pub mod validate;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Print a report as pretty JSON or with the given text renderer.
pub(crate) fn emit<T: Serialize>(report: &T, output: OutputFormat, text: impl Fn(&T) -> String) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => println!("{}", text(report)),
    }
    Ok(())
}
