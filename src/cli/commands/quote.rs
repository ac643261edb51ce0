//! Quote command implementation.

use anyhow::{Context, Result};
use stockscope_analysis::recent_price;
use stockscope_core::traits::DataSource;
use stockscope_core::types::QuoteReport;
use tracing::info;

use super::emit;
use crate::cli::QuoteArgs;

pub async fn run(args: QuoteArgs, source: &dyn DataSource) -> Result<()> {
    info!(ticker = %args.ticker, source = source.name(), "fetching quote");

    let quote = recent_price(source, &args.ticker)
        .await
        .with_context(|| format!("Failed to get a quote for {}", args.ticker))?;

    emit(&quote, args.output, render)
}

fn render(quote: &QuoteReport) -> String {
    format!(
        "{}  last {:.2}  open {:.2}  high {:.2}  low {:.2}  volume {}",
        quote.ticker, quote.last_close, quote.open, quote.high, quote.low, quote.volume
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_quote() {
        let quote = QuoteReport {
            ticker: "AAPL".to_string(),
            last_close: 196.89,
            open: 196.9,
            high: 196.94,
            low: 194.14,
            volume: 53_103_900,
        };

        assert_eq!(
            render(&quote),
            "AAPL  last 196.89  open 196.90  high 196.94  low 194.14  volume 53103900"
        );
    }
}
