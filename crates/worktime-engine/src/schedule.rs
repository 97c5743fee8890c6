//! Validated weekly schedule and the partial-day work routine.

use chrono::{Duration, Weekday};

use crate::shift::{DayStatistics, WorkShift};

/// Days of the week, Sunday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Shifts of one working day with their aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// Sorted by start, ascending.
    pub shifts: Vec<WorkShift>,
    pub stats: DayStatistics,
}

/// Per-weekday shifts and statistics produced by the configuration builder.
///
/// Only days with strictly positive work are present; every other day
/// contributes zero to any query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    days: [Option<DaySchedule>; 7],
    total_week_work: Duration,
}

fn index(day: Weekday) -> usize {
    day.num_days_from_sunday() as usize
}

impl WeeklySchedule {
    pub(crate) fn new(days: [Option<DaySchedule>; 7], total_week_work: Duration) -> Self {
        Self {
            days,
            total_week_work,
        }
    }

    /// Sum of every day's work over one full week.
    pub fn total_week_work(&self) -> Duration {
        self.total_week_work
    }

    pub fn day(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days[index(day)].as_ref()
    }

    /// Sorted shifts for `day`; empty for a day without work.
    pub fn shifts(&self, day: Weekday) -> &[WorkShift] {
        self.day(day).map_or(&[], |d| d.shifts.as_slice())
    }

    /// Total work scheduled on `day`.
    pub fn day_total(&self, day: Weekday) -> Duration {
        self.day(day)
            .map_or(Duration::zero(), |d| d.stats.total_work)
    }

    /// Number of days that carry work.
    pub fn working_days(&self) -> usize {
        self.days.iter().flatten().count()
    }

    /// Work scheduled on `day` between the offsets `start` and `end`.
    ///
    /// Walks the sorted shifts once, left to right. The bounds check answers
    /// full-coverage and no-overlap queries without touching the shifts.
    pub fn partial_work(&self, start: Duration, end: Duration, day: Weekday) -> Duration {
        let Some(schedule) = self.day(day) else {
            return Duration::zero();
        };
        let bounds = schedule.stats.bounds;

        if start <= bounds.start && end >= bounds.end {
            return schedule.stats.total_work;
        }
        if start >= bounds.end || end <= bounds.start {
            return Duration::zero();
        }

        let mut total = Duration::zero();
        for shift in &schedule.shifts {
            if end < shift.start {
                break;
            }
            if shift.contains(start) {
                if shift.contains(end) {
                    return end - start;
                }
                total += shift.end - start;
            } else if start < shift.start {
                if shift.contains(end) {
                    return total + (end - shift.start);
                }
                total += shift.duration();
            }
        }
        total
    }
}
