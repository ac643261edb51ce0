//! Historical price data sources.
//!
//! Each source implements `DataSource`: an unknown ticker is an empty
//! series, transport and parse failures are `DataError`s.

mod csv_source;
mod memory;
mod resample;
mod yahoo;

pub use csv_source::CsvDataSource;
pub use memory::InMemoryDataSource;
pub use resample::resample;
pub use yahoo::{YahooChartSource, YahooConfig};
