//! Time intervals and their relations.

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// A time span within a single day.
///
/// Callers are expected to hand the core intervals with `start < end`;
/// worked-period validation re-checks that for user input, rulesets are
/// checked by the input layer. The overlap test is only meaningful when
/// the invariant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    #[serde(rename = "startTime")]
    pub start: TimeOfDay,
    #[serde(rename = "endTime")]
    pub end: TimeOfDay,
}

impl Interval {
    #[must_use]
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Open overlap test: the intervals share at least one interior
    /// instant. Touching endpoints (`self.end == other.start`) do not
    /// count. Symmetric.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Both endpoints equal. Implies `overlaps` for non-degenerate
    /// intervals.
    #[must_use]
    pub fn matches_exactly(&self, other: &Self) -> bool {
        self == other
    }

    /// Length in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i32 {
        self.end.minutes_since(self.start)
    }

    /// Length in fractional hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> Interval {
        Interval::new(
            start.parse().expect("well-formed start"),
            end.parse().expect("well-formed end"),
        )
    }

    #[test]
    fn overlap_is_symmetric() {
        let morning = interval("9:00 AM", "12:00 PM");
        let late_morning = interval("11:00 AM", "2:00 PM");
        assert!(morning.overlaps(&late_morning));
        assert!(late_morning.overlaps(&morning));

        let evening = interval("6:00 PM", "9:00 PM");
        assert!(!morning.overlaps(&evening));
        assert!(!evening.overlaps(&morning));
    }

    #[test]
    fn non_degenerate_interval_overlaps_itself() {
        let shift = interval("9:00 AM", "5:00 PM");
        assert!(shift.overlaps(&shift));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let first = interval("9:00 AM", "10:00 AM");
        let second = interval("10:00 AM", "11:00 AM");
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn nested_interval_overlaps() {
        let outer = interval("9:00 AM", "5:00 PM");
        let inner = interval("10:00 AM", "2:00 PM");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn exact_match_implies_overlap() {
        let a = interval("9:00 AM", "5:00 PM");
        let b = interval("9:00 AM", "5:00 PM");
        assert!(a.matches_exactly(&b));
        assert!(a.overlaps(&b));

        let shifted = interval("9:00 AM", "4:00 PM");
        assert!(!a.matches_exactly(&shifted));
    }

    #[test]
    fn durations() {
        let shift = interval("9:00 AM", "5:30 PM");
        assert_eq!(shift.duration_minutes(), 510);
        assert!((shift.duration_hours() - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_uses_start_and_end_time_keys() {
        let shift = interval("9:00 AM", "5:00 PM");
        let json = serde_json::to_string(&shift).unwrap();
        assert_eq!(json, r#"{"startTime":"9:00 AM","endTime":"5:00 PM"}"#);
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shift);
    }
}
