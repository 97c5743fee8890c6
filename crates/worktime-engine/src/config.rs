//! Serde-friendly configuration documents.
//!
//! ```json
//! {
//!   "schedule": {
//!     "Sun": [{ "start": "09:00", "end": "13:00" }, { "start": "14:00", "end": "18:00" }],
//!     "Mon": [{ "start": "09:00", "end": "18:00" }]
//!   },
//!   "holidays": [{ "start": "2021-06-02", "end": "2021-06-08" }]
//! }
//! ```
//!
//! Weekday keys accept any name `chrono::Weekday` parses (`"Sun"`, `"sunday"`,
//! ...). Time-of-day values are `HH:MM` or `HH:MM:SS`.

use std::collections::{BTreeMap, HashMap};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkTimeError};
use crate::holiday::HolidayRange;
use crate::shift::{parse_time_of_day, WorkShift};

/// One shift as written in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    pub start: String,
    pub end: String,
}

impl ShiftConfig {
    fn to_shift(&self) -> Result<WorkShift> {
        Ok(WorkShift::new(
            parse_time_of_day(&self.start)?,
            parse_time_of_day(&self.end)?,
        ))
    }
}

/// A weekly schedule and holiday list as written in a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub schedule: BTreeMap<String, Vec<ShiftConfig>>,
    #[serde(default)]
    pub holidays: Vec<HolidayRange>,
}

impl CalendarConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert into the raw tables accepted by
    /// [`WorkTimeCalculator::configure`](crate::WorkTimeCalculator::configure).
    ///
    /// Keys naming the same weekday (`"Sun"` and `"sunday"`) are merged.
    /// Shift values are parsed but not validated; validation happens when the
    /// tables are configured.
    ///
    /// # Errors
    /// [`WorkTimeError::InvalidWeekday`] for an unknown key and
    /// [`WorkTimeError::InvalidTimeOfDay`] for a malformed time.
    pub fn into_parts(self) -> Result<(HashMap<Weekday, Vec<WorkShift>>, Vec<HolidayRange>)> {
        let mut schedule: HashMap<Weekday, Vec<WorkShift>> = HashMap::new();
        for (name, shifts) in &self.schedule {
            let day: Weekday = name
                .trim()
                .parse()
                .map_err(|_| WorkTimeError::InvalidWeekday(name.clone()))?;
            let parsed = shifts
                .iter()
                .map(ShiftConfig::to_shift)
                .collect::<Result<Vec<_>>>()?;
            schedule.entry(day).or_default().extend(parsed);
        }
        Ok((schedule, self.holidays))
    }
}
