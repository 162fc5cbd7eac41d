use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar day of a daily record; reporting only, never used in the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Day offset by `days`, used to lay out synthetic daily series
    pub fn plus_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::days(days))
            .map(Self)
    }
}

impl FromStr for TradeDate {
    type Err = String;

    /// Supports "YYYY-MM-DD", "YYYY-MM-DD HH:MM:SS" and "YYYYMMDD"
    fn from_str(time_str: &str) -> Result<Self, Self::Err> {
        let s = time_str.trim();
        let date = if s.contains(' ') {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.date())
                .map_err(|e| format!("bad date '{}': {}", s, e))?
        } else if s.contains('-') {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("bad date '{}': {}", s, e))?
        } else {
            NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|e| format!("bad date '{}': {}", s, e))?
        };
        Ok(Self(date))
    }
}

impl fmt::Display for TradeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
