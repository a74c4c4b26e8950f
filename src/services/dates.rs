//! Calendar date helpers
//!
//! Dates arrive from the backend as `YYYY-MM-DD` strings. They are read
//! component-wise into a `NaiveDate` so no timezone offset can move them onto
//! the previous day, and month differences are taken on (year, month) only.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::{EclosionError, EclosionResult};
use crate::models::MonthKey;

/// Formats tried when a date is not plain `YYYY-MM-DD`
const FALLBACK_DATE_FORMATS: [&str; 2] = ["%Y/%m/%d", "%m/%d/%Y"];
const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse an ISO calendar date as a local date
///
/// Input that does not split into three numeric components goes through a
/// best-effort fallback (RFC 3339 timestamps, slash-separated dates). Only
/// input that no fallback accepts is an error.
pub fn parse_local_date(iso: &str) -> EclosionResult<NaiveDate> {
    let trimmed = iso.trim();
    let parts: Vec<&str> = trimmed.split('-').collect();

    if let [year, month, day] = parts.as_slice() {
        if let (Ok(year), Ok(month), Ok(day)) =
            (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>())
        {
            return NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| EclosionError::invalid_date(iso));
        }
    }

    debug!(input = trimmed, "date is not YYYY-MM-DD, trying fallback formats");
    parse_fallback(trimmed).ok_or_else(|| EclosionError::invalid_date(iso))
}

fn parse_fallback(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
}

/// Format a date as zero-padded `YYYY-MM-DD`
pub fn format_local_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    MonthKey::from_date(date).first_day()
}

/// First day of the month containing an ISO date, as an ISO date
pub fn get_month_start(iso: &str) -> EclosionResult<String> {
    let date = parse_local_date(iso)?;
    Ok(format_local_date(month_start(date)))
}

/// Whole months from `from` to `to`, ignoring day of month
///
/// A `to` in the same month or earlier yields zero.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    MonthKey::from_date(from).months_until(&MonthKey::from_date(to))
}

/// [`months_between`] over ISO date strings
pub fn months_between_iso(from: &str, to: &str) -> EclosionResult<u32> {
    Ok(months_between(parse_local_date(from)?, parse_local_date(to)?))
}
