//! Day-granular time snapshot and date normalization.
//!
//! Classification never reads the clock directly. One [`DayContext`] is
//! captured per ordering pass and threaded through every call, so a pass
//! over many tasks stays internally consistent even while wall-clock time
//! advances (including across a midnight boundary mid-pass).

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::DateError;

/// Day-relative reference frame for one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub day_after_tomorrow: NaiveDate,
}

impl DayContext {
    /// Capture the current instant exactly once and derive the day boundaries.
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }

    /// Build the context from an already-captured instant.
    ///
    /// Tests and batch callers use this to pin the reference day.
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let today = instant.date_naive();
        Self {
            today,
            tomorrow: today + Duration::days(1),
            day_after_tomorrow: today + Duration::days(2),
        }
    }
}

/// Truncate an instant to its calendar day.
///
/// Two instants on the same calendar day normalize to identical values, so
/// downstream code compares dates with plain equality.
pub fn normalize_date(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Parse a stored date input: RFC 3339, or a plain `YYYY-MM-DD` day.
///
/// The calendar day is taken from the fields the input resolves to; any
/// time-of-day is discarded.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| DateError::Unparseable(input.to_string()))
}

/// True when the date demands attention now: today, tomorrow, or any day in
/// the past. The day after tomorrow and beyond are not urgent.
pub fn is_date_urgent(date: NaiveDate, ctx: &DayContext) -> bool {
    date < ctx.day_after_tomorrow
}
