//! Error types for worktime-engine configuration.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Errors raised while building a work-time configuration.
///
/// Interval queries never fail; every variant here is a caller configuration
/// bug surfaced synchronously by `configure`.
#[derive(Error, Debug)]
pub enum WorkTimeError {
    /// The schedule names no day at all.
    #[error("Working schedule is empty")]
    EmptySchedule,

    /// A shift's end is not after its start.
    #[error("Working schedule misconfiguration, a shift ends before the start in ({day})")]
    ShiftOrderInvalid { day: Weekday },

    /// A shift's start or end lies outside 00:00:00..=24:00:00.
    #[error("Working schedule misconfiguration, a value is out of day hours range (0-24) in ({day})")]
    ShiftOutOfRange { day: Weekday },

    /// A holiday range ends before it starts.
    #[error("Holiday end precedes the start [from {start} to {end}]")]
    HolidayRangeInvalid { start: NaiveDate, end: NaiveDate },

    /// A time-of-day string in a configuration document could not be parsed.
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    /// A schedule key in a configuration document is not a weekday name.
    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    /// The configuration document was not valid JSON for the expected shape.
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WorkTimeError>;
