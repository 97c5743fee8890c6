//! Holiday date ranges and the date predicates used for overlap accounting.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A raw holiday as supplied by the caller; both dates are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HolidayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A holiday covering a single date.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Midnight at which the range begins.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Midnight following the range's last day.
    pub fn end_instant(&self) -> NaiveDateTime {
        day_after(self.end)
    }
}

/// How a holiday relates to a queried date span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayOverlap {
    /// The holiday lies entirely inside the span.
    Within,
    /// The holiday begins before the span and ends inside it.
    LeftBorder,
    /// The holiday begins inside the span and ends after it.
    RightBorder,
}

/// A validated holiday with the work it would have displaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    range: HolidayRange,
    total_work: Duration,
}

impl Holiday {
    pub(crate) fn new(range: HolidayRange, total_work: Duration) -> Self {
        Self { range, total_work }
    }

    pub fn range(&self) -> HolidayRange {
        self.range
    }

    pub fn start(&self) -> NaiveDate {
        self.range.start
    }

    pub fn end(&self) -> NaiveDate {
        self.range.end
    }

    /// Work the normal schedule assigns to the whole holiday span.
    pub fn total_work(&self) -> Duration {
        self.total_work
    }

    pub fn start_instant(&self) -> NaiveDateTime {
        self.range.start_instant()
    }

    pub fn end_instant(&self) -> NaiveDateTime {
        self.range.end_instant()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Whether the holiday spans every date from `start` to `end`.
    pub fn covers(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start() <= start && self.end() >= end
    }

    /// Classify the holiday against the dates `start..=end`.
    ///
    /// The three cases are mutually exclusive; `None` means the holiday
    /// either misses the span or covers it entirely.
    pub fn overlap(&self, start: NaiveDate, end: NaiveDate) -> Option<HolidayOverlap> {
        let (first, last) = (self.start(), self.end());
        if first >= start && last <= end {
            Some(HolidayOverlap::Within)
        } else if first < start && last >= start && last < end {
            Some(HolidayOverlap::LeftBorder)
        } else if first > start && first <= end && last > end {
            Some(HolidayOverlap::RightBorder)
        } else {
            None
        }
    }
}

/// Midnight starting the day after `date`, saturating at the calendar's end.
pub(crate) fn day_after(date: NaiveDate) -> NaiveDateTime {
    date.succ_opt()
        .map_or(NaiveDateTime::MAX, |next| next.and_time(NaiveTime::MIN))
}
