//! Work-time queries over a configured schedule and holiday list.
//!
//! [`WorkTimeConfig`] is an immutable snapshot of everything a query reads.
//! [`WorkTimeCalculator`] holds the current snapshot behind a lock and swaps
//! it wholesale on reconfiguration, so a query always sees one complete
//! configuration and a failed reconfiguration leaves the previous one in place.

use std::collections::HashMap;
use std::iter;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use tracing::{info, trace};

use crate::builder;
use crate::config::CalendarConfig;
use crate::error::Result;
use crate::holiday::{Holiday, HolidayOverlap, HolidayRange};
use crate::schedule::WeeklySchedule;
use crate::shift::{day_end, day_start, time_of_day, WorkShift};

/// Validated schedule plus resolved holidays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTimeConfig {
    schedule: WeeklySchedule,
    holidays: Vec<Holiday>,
}

impl WorkTimeConfig {
    /// Validate `schedule` and `holidays` and derive every lookup table.
    ///
    /// # Errors
    /// Any [`WorkTimeError`](crate::WorkTimeError) raised by
    /// [`build_schedule`](crate::builder::build_schedule) or
    /// [`resolve_holidays`](crate::builder::resolve_holidays).
    pub fn build(
        schedule: &HashMap<Weekday, Vec<WorkShift>>,
        holidays: &[HolidayRange],
    ) -> Result<Self> {
        let schedule = builder::build_schedule(schedule)?;
        let holidays = builder::resolve_holidays(&schedule, holidays)?;
        Ok(Self { schedule, holidays })
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Resolved holidays in configuration order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Work between `start` and `end`, with holidays excluded.
    ///
    /// Returns zero when `end <= start`.
    pub fn work_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> Duration {
        interval_work(&self.schedule, &self.holidays, start, end)
    }

    /// Work between `start` and `end` as if no holidays were configured.
    pub fn work_time_including_holidays(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Duration {
        interval_work(&self.schedule, &[], start, end)
    }

    /// Work between `start` and `end`, excluding holidays only if asked to.
    pub fn work_time_with(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_holidays: bool,
    ) -> Duration {
        if exclude_holidays {
            self.work_time(start, end)
        } else {
            self.work_time_including_holidays(start, end)
        }
    }
}

/// Holder of the current [`WorkTimeConfig`], replaceable at runtime.
///
/// Queries clone the current `Arc` and compute without holding the lock.
#[derive(Debug)]
pub struct WorkTimeCalculator {
    current: RwLock<Arc<WorkTimeConfig>>,
}

impl WorkTimeCalculator {
    /// Build a calculator configured with `schedule` and `holidays`.
    pub fn new(
        schedule: &HashMap<Weekday, Vec<WorkShift>>,
        holidays: &[HolidayRange],
    ) -> Result<Self> {
        let config = WorkTimeConfig::build(schedule, holidays)?;
        Ok(Self::from_snapshot(config))
    }

    /// Build a calculator from a parsed configuration document.
    pub fn from_config(config: CalendarConfig) -> Result<Self> {
        let (schedule, holidays) = config.into_parts()?;
        Self::new(&schedule, &holidays)
    }

    pub fn from_snapshot(config: WorkTimeConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(config)),
        }
    }

    /// Replace the configuration.
    ///
    /// The new snapshot is built before the swap; on error the previous
    /// configuration remains active.
    pub fn configure(
        &self,
        schedule: &HashMap<Weekday, Vec<WorkShift>>,
        holidays: &[HolidayRange],
    ) -> Result<()> {
        let config = WorkTimeConfig::build(schedule, holidays)?;
        info!(
            working_days = config.schedule.working_days(),
            holidays = config.holidays.len(),
            "work-time configuration replaced"
        );
        // The guarded value is always a complete snapshot, so a poisoned
        // lock is still safe to reuse.
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
        Ok(())
    }

    /// The configuration queries currently run against.
    pub fn snapshot(&self) -> Arc<WorkTimeConfig> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Work between `start` and `end`, with holidays excluded.
    pub fn work_time(&self, start: NaiveDateTime, end: NaiveDateTime) -> Duration {
        self.snapshot().work_time(start, end)
    }

    /// Work between `start` and `end`, excluding holidays only if asked to.
    pub fn work_time_with(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_holidays: bool,
    ) -> Duration {
        self.snapshot().work_time_with(start, end, exclude_holidays)
    }
}

/// Work scheduled in `[start, end)` minus the work displaced by `holidays`.
///
/// An empty `holidays` slice disables holiday exclusion; the holiday-overlap
/// step recurses that way so border holidays are never subtracted twice.
///
/// The range is decomposed into a partial first day, whole weeks, the
/// remaining weekdays and a partial last day. Holidays are then subtracted
/// by their relation to the queried dates.
pub(crate) fn interval_work(
    schedule: &WeeklySchedule,
    holidays: &[Holiday],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Duration {
    if end <= start {
        return Duration::zero();
    }
    let (start_date, end_date) = (start.date(), end.date());
    if holidays.iter().any(|h| h.covers(start_date, end_date)) {
        return Duration::zero();
    }

    let first_day_holiday = is_holiday(holidays, start_date);

    if start_date == end_date {
        if first_day_holiday {
            return Duration::zero();
        }
        return schedule.partial_work(time_of_day(start), time_of_day(end), start.weekday());
    }

    let first_day = schedule.partial_work(time_of_day(start), day_end(), start.weekday());
    let last_day = schedule.partial_work(day_start(), time_of_day(end), end.weekday());

    let day_span = (end_date - start_date).num_days();
    if day_span == 1 {
        let last_day_holiday = is_holiday(holidays, end_date);
        let first = if first_day_holiday { Duration::zero() } else { first_day };
        let last = if last_day_holiday { Duration::zero() } else { last_day };
        return first + last;
    }

    // Days strictly between the two boundary days.
    let inner_days = day_span - 1;
    let whole_weeks = i32::try_from(inner_days / 7).unwrap_or(i32::MAX);
    let extra_days = (inner_days % 7) as usize;

    let extra_work = iter::successors(Some(start.weekday().succ()), |d| Some(d.succ()))
        .take(extra_days)
        .fold(Duration::zero(), |acc, day| acc + schedule.day_total(day));

    let holiday_work = holiday_overlap_work(schedule, holidays, start, end);
    trace!(
        inner_days,
        holiday_minutes = holiday_work.num_minutes(),
        "multi-day work-time query"
    );

    let total = schedule.total_week_work() * whole_weeks + extra_work + first_day + last_day
        - holiday_work;
    total.max(Duration::zero())
}

fn is_holiday(holidays: &[Holiday], date: NaiveDate) -> bool {
    holidays.iter().any(|h| h.contains_date(date))
}

/// Work to subtract for holidays that fall inside or across `start..end`.
///
/// Holidays inside the dates contribute their precomputed totals; holidays
/// crossing a border are priced over the shared part with exclusion off.
fn holiday_overlap_work(
    schedule: &WeeklySchedule,
    holidays: &[Holiday],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Duration {
    let (start_date, end_date) = (start.date(), end.date());
    holidays
        .iter()
        .filter_map(|h| {
            let work = match h.overlap(start_date, end_date)? {
                HolidayOverlap::Within => h.total_work(),
                HolidayOverlap::LeftBorder => interval_work(schedule, &[], start, h.end_instant()),
                HolidayOverlap::RightBorder => {
                    interval_work(schedule, &[], h.start_instant(), end)
                }
            };
            Some(work)
        })
        .fold(Duration::zero(), |acc, work| acc + work)
}
