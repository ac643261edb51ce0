//! Sampling interval definitions for market data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sampling granularity of bars.
///
/// Codes follow the chart API vocabulary (`1m`, `1h`, `1d`, `1wk`, `1mo`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1 minute bars
    #[serde(rename = "1m")]
    Minute1,
    /// 2 minute bars
    #[serde(rename = "2m")]
    Minute2,
    /// 5 minute bars
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minute bars
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minute bars
    #[serde(rename = "30m")]
    Minute30,
    /// 60 minute bars
    #[serde(rename = "60m")]
    Minute60,
    /// 90 minute bars
    #[serde(rename = "90m")]
    Minute90,
    /// 1 hour bars
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars
    #[serde(rename = "1d")]
    #[default]
    Daily,
    /// 5 day bars
    #[serde(rename = "5d")]
    Day5,
    /// Weekly bars
    #[serde(rename = "1wk")]
    Weekly,
    /// Monthly bars
    #[serde(rename = "1mo")]
    Monthly,
    /// Quarterly bars
    #[serde(rename = "3mo")]
    Quarterly,
}

impl Interval {
    /// Chart API code for this interval.
    pub fn code(&self) -> &'static str {
        match self {
            Interval::Minute1 => "1m",
            Interval::Minute2 => "2m",
            Interval::Minute5 => "5m",
            Interval::Minute15 => "15m",
            Interval::Minute30 => "30m",
            Interval::Minute60 => "60m",
            Interval::Minute90 => "90m",
            Interval::Hour1 => "1h",
            Interval::Daily => "1d",
            Interval::Day5 => "5d",
            Interval::Weekly => "1wk",
            Interval::Monthly => "1mo",
            Interval::Quarterly => "3mo",
        }
    }

    /// Check if this is an intraday interval.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Interval::Minute1
                | Interval::Minute2
                | Interval::Minute5
                | Interval::Minute15
                | Interval::Minute30
                | Interval::Minute60
                | Interval::Minute90
                | Interval::Hour1
        )
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.split_whitespace().collect::<String>().to_lowercase();
        match normalized.as_str() {
            "1m" | "1min" | "minute" => Ok(Interval::Minute1),
            "2m" | "2min" => Ok(Interval::Minute2),
            "5m" | "5min" => Ok(Interval::Minute5),
            "15m" | "15min" => Ok(Interval::Minute15),
            "30m" | "30min" => Ok(Interval::Minute30),
            "60m" | "60min" => Ok(Interval::Minute60),
            "90m" | "90min" => Ok(Interval::Minute90),
            "1h" | "1hour" | "hour" | "hourly" => Ok(Interval::Hour1),
            "1d" | "day" | "daily" => Ok(Interval::Daily),
            "5d" | "5days" => Ok(Interval::Day5),
            "1wk" | "1w" | "week" | "weekly" => Ok(Interval::Weekly),
            "1mo" | "month" | "monthly" => Ok(Interval::Monthly),
            "3mo" | "quarter" | "quarterly" => Ok(Interval::Quarterly),
            _ => Err(format!("Invalid interval: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_parse() {
        assert_eq!(Interval::from_str("1m").unwrap(), Interval::Minute1);
        assert_eq!(Interval::from_str("1d").unwrap(), Interval::Daily);
        assert_eq!(Interval::from_str("daily").unwrap(), Interval::Daily);
        assert_eq!(Interval::from_str("1mo").unwrap(), Interval::Monthly);
        assert_eq!(Interval::from_str("Weekly").unwrap(), Interval::Weekly);
        assert!(Interval::from_str("fortnightly").is_err());
    }

    #[test]
    fn test_interval_display() {
        assert_eq!(Interval::Minute1.to_string(), "1m");
        assert_eq!(Interval::Daily.to_string(), "1d");
        assert_eq!(Interval::Weekly.to_string(), "1wk");
    }

    #[test]
    fn test_interval_serde_uses_codes() {
        let json = serde_json::to_string(&Interval::Monthly).unwrap();
        assert_eq!(json, "\"1mo\"");
        let parsed: Interval = serde_json::from_str("\"1h\"").unwrap();
        assert_eq!(parsed, Interval::Hour1);
    }

    #[test]
    fn test_is_intraday() {
        assert!(Interval::Minute1.is_intraday());
        assert!(Interval::Hour1.is_intraday());
        assert!(!Interval::Daily.is_intraday());
        assert!(!Interval::Weekly.is_intraday());
    }
}
