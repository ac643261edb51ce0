//! History command implementation.

use anyhow::{Context, Result};
use stockscope_analysis::{price_history, HistoryRequest};
use stockscope_config::AnalysisSettings;
use stockscope_core::traits::DataSource;
use stockscope_core::types::HistoryReport;
use tracing::info;

use super::emit;
use crate::cli::HistoryArgs;

pub async fn run(args: HistoryArgs, defaults: &AnalysisSettings, source: &dyn DataSource) -> Result<()> {
    let request = HistoryRequest {
        period: args.period.unwrap_or_else(|| defaults.period.clone()),
        interval: args.interval.unwrap_or_else(|| defaults.interval.clone()),
        limit: args.limit.unwrap_or(defaults.history_limit),
    };
    info!(
        ticker = %args.ticker,
        period = %request.period,
        interval = %request.interval,
        limit = request.limit,
        "fetching history"
    );

    let report = price_history(source, &args.ticker, &request)
        .await
        .with_context(|| format!("Failed to get price history for {}", args.ticker))?;

    emit(&report, args.output, render)
}

fn render(report: &HistoryReport) -> String {
    let mut out = format!(
        "{} ({} / {}, {} bars)\n{:<10} {:>10} {:>10} {:>10} {:>10} {:>12}",
        report.ticker,
        report.period,
        report.interval,
        report.points.len(),
        "date",
        "open",
        "high",
        "low",
        "close",
        "volume"
    );
    for p in &report.points {
        out.push_str(&format!(
            "\n{:<10} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            p.date, p.open, p.high, p.low, p.close, p.volume
        ));
    }
    out
}
