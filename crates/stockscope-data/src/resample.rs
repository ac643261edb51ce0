//! Aggregation of daily bars into coarser intervals.

use chrono::{Datelike, NaiveDate};
use stockscope_core::error::DataError;
use stockscope_core::types::{Interval, PriceBar};

/// Bucket a bar's date falls into for the given interval.
fn bucket(date: NaiveDate, interval: Interval) -> Option<(i32, u32)> {
    match interval {
        Interval::Weekly => {
            let week = date.iso_week();
            Some((week.year(), week.week()))
        }
        Interval::Monthly => Some((date.year(), date.month())),
        Interval::Quarterly => Some((date.year(), (date.month() - 1) / 3)),
        _ => None,
    }
}

/// `f64::max` that keeps a missing value missing.
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// `f64::min` that keeps a missing value missing.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Aggregate oldest-first daily bars into `interval` bars.
///
/// Each output bar takes the first open, the highest high, the lowest low,
/// the last close and the summed volume of its bucket, and is dated by the
/// first daily bar in the bucket. A NaN high or low anywhere in a bucket
/// stays NaN in the output bar. Daily input is returned unchanged.
pub fn resample(bars: Vec<PriceBar>, interval: Interval) -> Result<Vec<PriceBar>, DataError> {
    if interval == Interval::Daily {
        return Ok(bars);
    }
    if !matches!(
        interval,
        Interval::Weekly | Interval::Monthly | Interval::Quarterly
    ) {
        return Err(DataError::UnsupportedInterval(format!(
            "{} cannot be built from daily bars",
            interval
        )));
    }

    let mut result: Vec<PriceBar> = Vec::new();
    let mut current_key = None;

    for bar in bars {
        let key = bucket(bar.date, interval);
        if key == current_key {
            if let Some(agg) = result.last_mut() {
                agg.high = nan_max(agg.high, bar.high);
                agg.low = nan_min(agg.low, bar.low);
                agg.close = bar.close;
                agg.volume = agg.volume.saturating_add(bar.volume);
                continue;
            }
        }
        current_key = key;
        result.push(bar);
    }

    Ok(result)
}
