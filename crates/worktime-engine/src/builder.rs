//! Configuration builder: validates raw shifts and holidays and derives the
//! tables the calculator reads.
//!
//! The build runs in two phases. [`build_schedule`] produces the shift-only
//! [`WeeklySchedule`]; [`resolve_holidays`] then prices each holiday against
//! that schedule with holiday exclusion off, so it never reads the holiday
//! list it is building.

use std::collections::HashMap;

use chrono::{Duration, Weekday};
use tracing::{debug, warn};

use crate::calculator::interval_work;
use crate::error::{Result, WorkTimeError};
use crate::holiday::{Holiday, HolidayRange};
use crate::schedule::{DaySchedule, WeeklySchedule, WEEK};
use crate::shift::{DayStatistics, WorkShift};

/// Validate a raw weekly shift table and derive its statistics.
///
/// Each day's shifts are sorted by start. Days are visited Sunday first, so
/// the reported error is deterministic when several days are invalid. Days
/// whose total work is zero are left out of the result.
///
/// # Errors
/// - [`WorkTimeError::EmptySchedule`] if `raw` names no day.
/// - [`WorkTimeError::ShiftOrderInvalid`] if a shift does not end after it starts.
/// - [`WorkTimeError::ShiftOutOfRange`] if a shift leaves `00:00..=24:00`.
pub fn build_schedule(raw: &HashMap<Weekday, Vec<WorkShift>>) -> Result<WeeklySchedule> {
    if raw.is_empty() {
        return Err(WorkTimeError::EmptySchedule);
    }

    let mut days: [Option<DaySchedule>; 7] = Default::default();
    let mut total_week_work = Duration::zero();

    for (slot, day) in days.iter_mut().zip(WEEK) {
        let Some(raw_shifts) = raw.get(&day) else {
            continue;
        };
        let mut shifts = raw_shifts.clone();
        shifts.sort_by_key(|s| s.start);

        let mut total_work = Duration::zero();
        for shift in &shifts {
            if shift.start >= shift.end {
                return Err(WorkTimeError::ShiftOrderInvalid { day });
            }
            if !shift.within_day() {
                return Err(WorkTimeError::ShiftOutOfRange { day });
            }
            total_work += shift.duration();
        }

        if shifts.windows(2).any(|w| w[0].end > w[1].start) {
            warn!(%day, "overlapping shifts; overlapping time is counted twice");
        }

        total_week_work += total_work;
        if total_work > Duration::zero() {
            let bounds = WorkShift::new(shifts[0].start, shifts[shifts.len() - 1].end);
            *slot = Some(DaySchedule {
                shifts,
                stats: DayStatistics { total_work, bounds },
            });
        }
    }

    let schedule = WeeklySchedule::new(days, total_week_work);
    debug!(
        working_days = schedule.working_days(),
        total_week_minutes = total_week_work.num_minutes(),
        "weekly schedule built"
    );
    Ok(schedule)
}

/// Validate raw holidays and price each one against `schedule`.
///
/// A holiday's work is what the schedule assigns to `[start, end + 1 day)`.
/// The output keeps input order; holidays are neither merged nor
/// deduplicated.
///
/// # Errors
/// Returns [`WorkTimeError::HolidayRangeInvalid`] for a range whose end
/// precedes its start.
pub fn resolve_holidays(
    schedule: &WeeklySchedule,
    raw: &[HolidayRange],
) -> Result<Vec<Holiday>> {
    let mut holidays = Vec::with_capacity(raw.len());
    for range in raw {
        if range.start > range.end {
            return Err(WorkTimeError::HolidayRangeInvalid {
                start: range.start,
                end: range.end,
            });
        }
        let total_work = interval_work(schedule, &[], range.start_instant(), range.end_instant());
        holidays.push(Holiday::new(*range, total_work));
    }

    for (i, a) in holidays.iter().enumerate() {
        for b in &holidays[i + 1..] {
            if a.start() <= b.end() && b.start() <= a.end() {
                warn!(
                    first_start = %a.start(),
                    second_start = %b.start(),
                    "overlapping holidays; shared dates are subtracted twice"
                );
            }
        }
    }

    debug!(holidays = holidays.len(), "holidays resolved");
    Ok(holidays)
}
