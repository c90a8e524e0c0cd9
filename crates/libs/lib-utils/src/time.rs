//! # Time Utilities
//!
//! Time helpers built on chrono: payout deadlines and the `YYYY-MM-DD` dates
//! produced by the incident date input.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Deadline `days` whole days after `from`. `days` must be positive and the
/// result must stay inside chrono's representable range.
pub fn deadline_after_days(from: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, Error> {
    if days <= 0 {
        return Err(Error::DeadlineOutOfRange(days));
    }
    Duration::try_days(days)
        .and_then(|span| from.checked_add_signed(span))
        .ok_or(Error::DeadlineOutOfRange(days))
}

/// Parse a calendar date as produced by a date input (`2024-01-15`).
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| Error::FailToDateParse(value.to_string()))
}

/// Human readable form of a calendar date (`Jan 15, 2024`). Values that do not
/// parse are returned untouched.
pub fn format_calendar_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
    DeadlineOutOfRange(i64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
