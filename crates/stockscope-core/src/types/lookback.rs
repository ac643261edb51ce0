//! Lookback periods for historical requests.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PriceBar;

/// Total lookback duration of a history request.
///
/// Day counts are trading sessions (bars); month and year counts are
/// calendar spans ending at the most recent bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Lookback {
    Days(u32),
    Months(u32),
    Years(u32),
    YearToDate,
    Max,
}

impl Default for Lookback {
    fn default() -> Self {
        Lookback::Months(3)
    }
}

impl Lookback {
    /// First calendar date included when the window ends at `end`.
    ///
    /// Returns `None` for windows that are not calendar based.
    pub fn start_date(&self, end: NaiveDate) -> Option<NaiveDate> {
        match self {
            Lookback::Months(n) => end.checked_sub_months(Months::new(*n)),
            Lookback::Years(n) => end.checked_sub_months(Months::new(n.saturating_mul(12))),
            Lookback::YearToDate => NaiveDate::from_ymd_opt(end.year(), 1, 1),
            Lookback::Days(_) | Lookback::Max => None,
        }
    }

    /// Restrict an oldest-first series to this lookback.
    pub fn select<'a>(&self, bars: &'a [PriceBar]) -> &'a [PriceBar] {
        let Some(last) = bars.last() else {
            return bars;
        };
        match self {
            Lookback::Max => bars,
            Lookback::Days(n) => super::last_n(bars, *n as usize),
            _ => match self.start_date(last.date) {
                Some(start) => {
                    let first = bars.partition_point(|b| b.date < start);
                    &bars[first..]
                }
                None => bars,
            },
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookback::Days(n) => write!(f, "{}d", n),
            Lookback::Months(n) => write!(f, "{}mo", n),
            Lookback::Years(n) => write!(f, "{}y", n),
            Lookback::YearToDate => f.write_str("ytd"),
            Lookback::Max => f.write_str("max"),
        }
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.split_whitespace().collect::<String>().to_lowercase();
        match normalized.as_str() {
            "ytd" => return Ok(Lookback::YearToDate),
            "max" | "all" => return Ok(Lookback::Max),
            _ => {}
        }

        let split = normalized
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("Invalid period: {}", s))?;
        let (count, unit) = normalized.split_at(split);
        let count: u32 = count
            .parse()
            .map_err(|_| format!("Invalid period: {}", s))?;
        if count == 0 {
            return Err(format!("Invalid period: {}", s));
        }

        match unit {
            "d" | "day" | "days" => Ok(Lookback::Days(count)),
            "mo" | "month" | "months" => Ok(Lookback::Months(count)),
            "y" | "yr" | "year" | "years" => Ok(Lookback::Years(count)),
            _ => Err(format!("Invalid period: {}", s)),
        }
    }
}

impl TryFrom<String> for Lookback {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lookback> for String {
    fn from(value: Lookback) -> Self {
        value.to_string()
    }
}
