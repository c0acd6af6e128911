//! Wall-clock time values.
//!
//! `TimeOfDay` is the single source of truth for comparing times: every
//! `H:MM AM/PM` string entering the system is converted to minutes since
//! midnight before any comparison. Raw strings are never compared
//! lexicographically ("9:00 AM" vs "10:00 AM" would sort backwards).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A time string did not match the `H:MM AM/PM` pattern.
///
/// Well-formedness is guaranteed upstream by the input layer, so hitting
/// this error means the caller contract was violated. The parser fails
/// fast rather than guessing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed time of day: {0:?} (expected H:MM AM/PM)")]
pub struct MalformedTime(pub String);

/// A wall-clock instant with no date component.
///
/// Stored as minutes since midnight in `[0, 1439]`. The textual form is
/// `H:MM AM/PM` with an hour of 1-12 (no leading zero), a two-digit
/// minute, and an uppercase meridiem: `12:00 AM` is 0, `12:00 PM` is 720,
/// `11:30 PM` is 1409.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time from a 24-hour clock reading. Callers pass literal
    /// in-range values only.
    pub(crate) const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight, in `[0, 1439]`.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Signed minute difference `self - earlier`.
    #[must_use]
    pub fn minutes_since(self, earlier: Self) -> i32 {
        i32::from(self.0) - i32::from(earlier.0)
    }
}

impl FromStr for TimeOfDay {
    type Err = MalformedTime;

    /// Parses `^([1-9]|1[0-2]):[0-5][0-9] (AM|PM)$`, exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedTime(s.to_string());

        let (clock, meridiem) = s.split_once(' ').ok_or_else(malformed)?;
        let pm = match meridiem {
            "AM" => false,
            "PM" => true,
            _ => return Err(malformed()),
        };

        let (hour_str, minute_str) = clock.split_once(':').ok_or_else(malformed)?;

        // Hour 1-12, digits only, no leading zero.
        if hour_str.is_empty()
            || hour_str.starts_with('0')
            || !hour_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let hour: u16 = hour_str.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&hour) {
            return Err(malformed());
        }

        // Minute is exactly two digits, 00-59.
        if minute_str.len() != 2 || !minute_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let minute: u16 = minute_str.parse().map_err(|_| malformed())?;
        if minute > 59 {
            return Err(malformed());
        }

        // 12 AM is hour 0, 12 PM stays hour 12, other PM hours add 12.
        let hour_24 = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };

        Ok(Self::from_hm(hour_24, minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour_24 = self.0 / 60;
        let minute = self.0 % 60;
        let (hour, meridiem) = match hour_24 {
            0 => (12, "AM"),
            1..=11 => (hour_24, "AM"),
            12 => (12, "PM"),
            _ => (hour_24 - 12, "PM"),
        };
        write!(f, "{hour}:{minute:02} {meridiem}")
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = MalformedTime;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
