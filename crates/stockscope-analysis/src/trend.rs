//! Moving-average trend and volatility for a ticker.

use stockscope_core::error::{AnalysisError, AnalysisResult};
use stockscope_core::traits::{DataSource, Indicator};
use stockscope_core::types::{closes, Trend, TrendReport};
use stockscope_indicators::{population_std_dev, SimpleReturns, Sma};

use crate::validation::{require_bars, require_finite_closes, require_positive, require_ticker};
use crate::{DEFAULT_INTERVAL, DEFAULT_PERIOD};

/// Default short moving-average window.
pub const DEFAULT_SHORT_WINDOW: usize = 20;
/// Default long moving-average window.
pub const DEFAULT_LONG_WINDOW: usize = 50;

/// Fixed note attached to every trend report.
pub const METHODOLOGY_NOTE: &str = "Trend compares simple moving averages of closing prices \
    (short above long is an uptrend, below is a downtrend, equal is sideways). \
    Volatility is the population standard deviation of simple period returns \
    over the fetched series. Informational only, not a forecast.";

/// Parameters of a trend request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendRequest {
    pub period: String,
    pub interval: String,
    pub short_window: usize,
    pub long_window: usize,
}

impl Default for TrendRequest {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            short_window: DEFAULT_SHORT_WINDOW,
            long_window: DEFAULT_LONG_WINDOW,
        }
    }
}

/// Compare short and long moving averages of `ticker` and estimate volatility.
///
/// Both averages and the volatility use the whole fetched series; a series
/// exactly as long as the larger window is accepted.
pub async fn analyze_trend<S>(
    source: &S,
    ticker: &str,
    request: &TrendRequest,
) -> AnalysisResult<TrendReport>
where
    S: DataSource + ?Sized,
{
    require_ticker(ticker)?;
    require_positive("short_window", request.short_window)?;
    require_positive("long_window", request.long_window)?;

    let bars = source
        .fetch(ticker, &request.period, &request.interval)
        .await?;
    let bars = require_bars(ticker, bars)?;

    let insufficient = || AnalysisError::InsufficientData {
        available: bars.len(),
        short_window: request.short_window,
        long_window: request.long_window,
    };
    if bars.len() < request.short_window.max(request.long_window) {
        return Err(insufficient());
    }

    require_finite_closes(&bars)?;
    let closes = closes(&bars);

    let ma_short = Sma::new(request.short_window)
        .latest(&closes)
        .map_err(|_| insufficient())?;
    let ma_long = Sma::new(request.long_window)
        .latest(&closes)
        .map_err(|_| insufficient())?;

    let returns = SimpleReturns.calculate(&closes);
    let volatility_estimate = population_std_dev(&returns).unwrap_or(0.0);

    Ok(TrendReport {
        ticker: ticker.to_string(),
        period: request.period.clone(),
        last_close: closes[closes.len() - 1],
        ma_short,
        ma_long,
        trend: Trend::classify(ma_short, ma_long),
        volatility_estimate,
        note: METHODOLOGY_NOTE.to_string(),
    })
}
