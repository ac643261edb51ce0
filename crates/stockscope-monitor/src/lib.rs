//! Logging and tracing setup for the stockscope binaries.

mod logging;

pub use logging::{setup_logging, LogOptions};
pub use tracing_appender::non_blocking::WorkerGuard;
