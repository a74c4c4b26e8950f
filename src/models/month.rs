//! Calendar month keys
//!
//! A `MonthKey` identifies a calendar month independent of day, serialized as
//! `YYYY-MM`. All month differences in the engine are taken between keys so
//! that day-of-month never leaks into the arithmetic.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A year+month pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of this month
    pub fn first_day(&self) -> NaiveDate {
        // year/month are validated on construction, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// Step forward by `months` calendar months
    pub fn add_months(&self, months: u32) -> Self {
        let index = self.index() + i64::from(months);
        Self::from_index(index)
    }

    /// Step forward by `months`, or `None` past the range chrono can date
    pub fn checked_add_months(&self, months: u32) -> Option<Self> {
        let index = self.index() + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = index.rem_euclid(12) as u32 + 1;
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::from_date)
    }

    /// Whole months from `self` until `other`, zero when `other` is not later
    pub fn months_until(&self, other: &MonthKey) -> u32 {
        let diff = other.index() - self.index();
        u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
    }

    /// Abbreviated month name, e.g. "Jan"
    pub fn short_label(&self) -> &'static str {
        &self.full_name()[..3]
    }

    /// Month name with year, e.g. "January 2026"
    pub fn long_label(&self) -> String {
        format!("{} {}", self.full_name(), self.year)
    }

    fn full_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    fn index(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month - 1)
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Parse a `YYYY-MM` string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range_month() {
        assert_eq!(MonthKey::new(2025, 0), Err(MonthParseError::InvalidMonth(0)));
        assert_eq!(MonthKey::new(2025, 13), Err(MonthParseError::InvalidMonth(13)));
    }

    #[test]
    fn test_navigation_across_year() {
        assert_eq!(key(2024, 12).next(), key(2025, 1));
        assert_eq!(key(2025, 11).add_months(4), key(2026, 3));
        assert_eq!(key(2025, 1).add_months(0), key(2025, 1));
        assert_eq!(key(2025, 1).add_months(24), key(2027, 1));
    }

    #[test]
    fn test_checked_add_months() {
        assert_eq!(key(2025, 11).checked_add_months(4), Some(key(2026, 3)));
        assert_eq!(key(2025, 1).checked_add_months(u32::MAX), None);
    }

    #[test]
    fn test_months_until_clamps() {
        assert_eq!(key(2025, 1).months_until(&key(2025, 3)), 2);
        assert_eq!(key(2024, 11).months_until(&key(2025, 2)), 3);
        assert_eq!(key(2025, 3).months_until(&key(2025, 1)), 0);
        assert_eq!(key(2025, 3).months_until(&key(2025, 3)), 0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(key(2026, 1).short_label(), "Jan");
        assert_eq!(key(2026, 9).short_label(), "Sep");
        assert_eq!(key(2027, 3).long_label(), "March 2027");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(MonthKey::parse("2025-01").unwrap(), key(2025, 1));
        assert_eq!(key(2025, 7).to_string(), "2025-07");
        assert!(MonthKey::parse("2025").is_err());
        assert!(MonthKey::parse("2025-13").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(key(2024, 12) < key(2025, 1));
        assert!(key(2025, 2) > key(2025, 1));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&key(2025, 3)).unwrap();
        assert_eq!(json, "\"2025-03\"");

        let back: MonthKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key(2025, 3));
        assert!(serde_json::from_str::<MonthKey>("\"2025-00\"").is_err());
    }
}
