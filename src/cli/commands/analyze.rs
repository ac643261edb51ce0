//! Analyze command implementation.

use anyhow::{Context, Result};
use stockscope_analysis::{analyze_trend, TrendRequest};
use stockscope_config::AnalysisSettings;
use stockscope_core::traits::DataSource;
use stockscope_core::types::TrendReport;
use tracing::info;

use super::emit;
use crate::cli::AnalyzeArgs;

pub async fn run(args: AnalyzeArgs, defaults: &AnalysisSettings, source: &dyn DataSource) -> Result<()> {
    let request = TrendRequest {
        period: args.period.unwrap_or_else(|| defaults.period.clone()),
        interval: args.interval.unwrap_or_else(|| defaults.interval.clone()),
        short_window: args.short_window.unwrap_or(defaults.short_window),
        long_window: args.long_window.unwrap_or(defaults.long_window),
    };
    info!(
        ticker = %args.ticker,
        period = %request.period,
        short_window = request.short_window,
        long_window = request.long_window,
        "analyzing trend"
    );

    let report = analyze_trend(source, &args.ticker, &request)
        .await
        .with_context(|| format!("Failed to analyze {}", args.ticker))?;

    info!(ticker = %report.ticker, trend = %report.trend, "analysis complete");
    emit(&report, args.output, |r| render(r, &request))
}

fn render(report: &TrendReport, request: &TrendRequest) -> String {
    format!(
        "{} over {}\n\
         last close      {:.2}\n\
         SMA({:<3})        {:.2}\n\
         SMA({:<3})        {:.2}\n\
         trend           {}\n\
         volatility      {:.2}%\n\n\
         {}",
        report.ticker,
        report.period,
        report.last_close,
        request.short_window,
        report.ma_short,
        request.long_window,
        report.ma_long,
        report.trend,
        report.volatility_estimate * 100.0,
        report.note
    )
}
