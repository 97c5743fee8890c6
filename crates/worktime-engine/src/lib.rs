//! # worktime-engine
//!
//! Working-hours arithmetic over a weekly shift schedule and a holiday list.
//!
//! Configure once with the recurring shifts of each weekday and the holiday
//! date ranges, then ask how much work falls between two instants. Partial
//! first and last days, whole weeks and holidays overlapping either border
//! are all accounted for.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use chrono::{Duration, NaiveDate, Weekday};
//! use worktime_engine::{HolidayRange, WorkShift, WorkTimeCalculator};
//!
//! let day = vec![WorkShift::from_hm((9, 0), (13, 0)), WorkShift::from_hm((14, 0), (18, 0))];
//! let schedule: HashMap<Weekday, Vec<WorkShift>> =
//!     [Weekday::Mon, Weekday::Tue].into_iter().map(|d| (d, day.clone())).collect();
//! let holidays = [HolidayRange::single(NaiveDate::from_ymd_opt(2021, 6, 8).unwrap())];
//!
//! let calc = WorkTimeCalculator::new(&schedule, &holidays).unwrap();
//! let start = NaiveDate::from_ymd_opt(2021, 6, 7).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2021, 6, 9).unwrap().and_hms_opt(0, 0, 0).unwrap();
//!
//! // Monday counts, Tuesday is a holiday.
//! assert_eq!(calc.work_time(start, end), Duration::hours(8));
//! assert_eq!(calc.work_time_with(start, end, false), Duration::hours(16));
//! ```
//!
//! ## Modules
//!
//! - [`shift`] — `WorkShift`, `DayStatistics`, time-of-day helpers
//! - [`schedule`] — validated `WeeklySchedule` and partial-day work
//! - [`holiday`] — holiday ranges and overlap classification
//! - [`builder`] — two-phase configuration build and validation
//! - [`calculator`] — `WorkTimeConfig` snapshots and `WorkTimeCalculator`
//! - [`config`] — JSON configuration documents
//! - [`error`] — Error types

pub mod builder;
pub mod calculator;
pub mod config;
pub mod error;
pub mod holiday;
pub mod schedule;
pub mod shift;

pub use calculator::{WorkTimeCalculator, WorkTimeConfig};
pub use config::{CalendarConfig, ShiftConfig};
pub use error::WorkTimeError;
pub use holiday::{Holiday, HolidayOverlap, HolidayRange};
pub use schedule::{DaySchedule, WeeklySchedule};
pub use shift::{parse_time_of_day, DayStatistics, WorkShift};
