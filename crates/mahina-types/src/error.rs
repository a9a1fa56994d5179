use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from mahina operations.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MahinaError {
    /// Year/month/day triple that is not a representable calendar date.
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Month argument not in `YYYY-MM` form, or month outside 1..=12.
    #[error("Invalid month '{input}': expected YYYY-MM")]
    InvalidMonth { input: String },

    /// IANA timezone name not found in the tz database.
    #[error("Unknown timezone '{0}'")]
    UnknownTimeZone(String),

    /// Local noon falls in a gap of the zone's offset rules.
    #[error("Noon on {date} does not exist in timezone {tz}")]
    NonexistentLocalTime { date: NaiveDate, tz: String },

    /// Planting dates out of order.
    #[error("Invalid planting timeline ({field}): {reason}")]
    InvalidTimeline { field: String, reason: String },
}

impl MahinaError {
    /// Creates an `InvalidDate` error.
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Self {
        Self::InvalidDate { year, month, day }
    }

    /// Creates an `InvalidMonth` error.
    pub fn invalid_month(input: impl Into<String>) -> Self {
        Self::InvalidMonth { input: input.into() }
    }

    /// Creates an `InvalidTimeline` error.
    pub fn invalid_timeline(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimeline { field: field.into(), reason: reason.into() }
    }
}
