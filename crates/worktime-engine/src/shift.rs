//! Recurring daily work shifts and time-of-day helpers.
//!
//! A time of day is a [`Duration`] offset from midnight rather than a
//! `NaiveTime`, so that the end of a day (`24:00:00`) is representable and raw
//! out-of-range values can reach validation instead of failing construction.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::error::{Result, WorkTimeError};

/// Midnight at the start of a day.
pub fn day_start() -> Duration {
    Duration::zero()
}

/// Midnight at the end of a day (`24:00:00`).
pub fn day_end() -> Duration {
    Duration::hours(24)
}

/// Offset of `instant` from the midnight that starts its calendar day.
pub fn time_of_day(instant: NaiveDateTime) -> Duration {
    instant.time().signed_duration_since(NaiveTime::MIN)
}

/// A recurring daily work interval, `start` to `end` as offsets from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkShift {
    pub start: Duration,
    pub end: Duration,
}

impl WorkShift {
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }

    /// Shift between two `(hour, minute)` wall-clock values.
    ///
    /// Hours are not clamped: `(24, 0)` is the end of the day and values past
    /// it are rejected later by the configuration builder.
    pub fn from_hm(start: (i64, i64), end: (i64, i64)) -> Self {
        Self {
            start: Duration::hours(start.0) + Duration::minutes(start.1),
            end: Duration::hours(end.0) + Duration::minutes(end.1),
        }
    }

    /// Length of the shift.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `offset` lies in `start..=end`.
    pub fn contains(&self, offset: Duration) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub(crate) fn within_day(&self) -> bool {
        let range = day_start()..=day_end();
        range.contains(&self.start) && range.contains(&self.end)
    }
}

/// Aggregates derived for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStatistics {
    /// Sum of the day's shift durations.
    pub total_work: Duration,
    /// Earliest shift start to latest shift end.
    pub bounds: WorkShift,
}

/// Parse `HH:MM` or `HH:MM:SS`, with an optional leading `-`.
///
/// Hours are unbounded so that `24:00` (and invalid values such as `25:00`)
/// parse; range checks belong to the configuration builder. Minutes and
/// seconds must be below 60.
pub fn parse_time_of_day(s: &str) -> Result<Duration> {
    let invalid = || WorkTimeError::InvalidTimeOfDay(s.to_string());
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(invalid());
    }

    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *field = part.parse().map_err(|_| invalid())?;
    }
    let [hours, minutes, seconds] = fields;
    if minutes >= 60 || seconds >= 60 {
        return Err(invalid());
    }

    let offset = Duration::hours(hours.into())
        + Duration::minutes(minutes.into())
        + Duration::seconds(seconds.into());
    Ok(if negative { -offset } else { offset })
}
