//! Worked periods: hours entered against a calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day::DayOfWeek;
use crate::interval::Interval;

/// Hours worked on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkedPeriod {
    /// ISO calendar date (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    #[serde(flatten)]
    pub interval: Interval,
}

impl WorkedPeriod {
    /// The day of week this period falls on.
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        DayOfWeek::of(self.date)
    }
}
