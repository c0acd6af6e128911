//! Caller-owned session state.
//!
//! The ruleset and worked-period collections live for one session only,
//! in insertion order. All mutation goes through validation; the pure
//! query functions in [`crate::validate`] and [`crate::aggregate`] only
//! ever see snapshots.

use crate::aggregate::total_weighted_hours;
use crate::ruleset::{Ruleset, sample_rulesets};
use crate::validate::{
    RulesetConflict, WorkedPeriodConflict, validate_new_ruleset, validate_new_worked_period,
};
use crate::worked::WorkedPeriod;

/// In-memory rulesets and worked periods for the current session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    rulesets: Vec<Ruleset>,
    periods: Vec<WorkedPeriod>,
    sample_loaded: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    #[must_use]
    pub fn periods(&self) -> &[WorkedPeriod] {
        &self.periods
    }

    /// Validates and appends a ruleset. The collection is unchanged on
    /// rejection.
    pub fn add_ruleset(&mut self, ruleset: Ruleset) -> Result<(), RulesetConflict> {
        validate_new_ruleset(&ruleset, &self.rulesets)?;
        self.rulesets.push(ruleset);
        Ok(())
    }

    /// Validates and appends a worked period. The collection is unchanged
    /// on rejection.
    pub fn add_period(&mut self, period: WorkedPeriod) -> Result<(), WorkedPeriodConflict> {
        validate_new_worked_period(&period, &self.periods)?;
        self.periods.push(period);
        Ok(())
    }

    /// Removes a single ruleset; returns it, or `None` if the index is out
    /// of range.
    pub fn remove_ruleset(&mut self, index: usize) -> Option<Ruleset> {
        (index < self.rulesets.len()).then(|| self.rulesets.remove(index))
    }

    /// Removes a single worked period; returns it, or `None` if the index
    /// is out of range.
    pub fn remove_period(&mut self, index: usize) -> Option<WorkedPeriod> {
        (index < self.periods.len()).then(|| self.periods.remove(index))
    }

    /// Bulk reset of rulesets. Also re-arms [`Self::load_sample_data`].
    pub fn clear_rulesets(&mut self) {
        self.rulesets.clear();
        self.sample_loaded = false;
    }

    /// Bulk reset of worked periods.
    pub fn clear_periods(&mut self) {
        self.periods.clear();
    }

    /// Appends the sample ruleset set, once per session.
    ///
    /// Each sample entry still goes through validation, so samples that
    /// conflict with user-added rulesets are skipped rather than inserted.
    /// Returns how many rulesets were added.
    pub fn load_sample_data(&mut self) -> usize {
        if self.sample_loaded {
            return 0;
        }
        self.sample_loaded = true;

        let mut added = 0;
        for ruleset in sample_rulesets() {
            if self.add_ruleset(ruleset).is_ok() {
                added += 1;
            }
        }
        added
    }

    /// Total weighted hours for the current snapshot.
    ///
    /// Recomputed from scratch on every call; nothing is cached across
    /// mutations.
    #[must_use]
    pub fn total(&self) -> f64 {
        total_weighted_hours(&self.rulesets, &self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DayOfWeek;
    use crate::interval::Interval;
    use crate::ruleset::{Multiplier, RulesetName};
    use chrono::NaiveDate;

    fn ruleset(day: DayOfWeek, start: &str, end: &str, multiplier: f64) -> Ruleset {
        Ruleset {
            name: RulesetName::new("Test Ruleset").unwrap(),
            day_of_week: day,
            interval: Interval::new(start.parse().unwrap(), end.parse().unwrap()),
            multiplier: Multiplier::new(multiplier).unwrap(),
        }
    }

    fn period(date: &str, start: &str, end: &str) -> WorkedPeriod {
        WorkedPeriod {
            date: date.parse::<NaiveDate>().unwrap(),
            interval: Interval::new(start.parse().unwrap(), end.parse().unwrap()),
        }
    }

    #[test]
    fn rejected_ruleset_leaves_collection_unchanged() {
        let mut session = Session::new();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "9:00 AM", "5:00 PM", 1.5))
            .unwrap();

        let conflicting = ruleset(DayOfWeek::Monday, "10:00 AM", "2:00 PM", 2.0);
        assert!(session.add_ruleset(conflicting).is_err());
        assert_eq!(session.rulesets().len(), 1);
    }

    #[test]
    fn insertion_order_is_stable() {
        let mut session = Session::new();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "9:00 AM", "5:00 PM", 1.0))
            .unwrap();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "5:00 PM", "9:00 PM", 1.5))
            .unwrap();
        session
            .add_ruleset(ruleset(DayOfWeek::Tuesday, "9:00 AM", "5:00 PM", 1.0))
            .unwrap();

        let days: Vec<_> = session.rulesets().iter().map(|r| r.day_of_week).collect();
        assert_eq!(
            days,
            vec![DayOfWeek::Monday, DayOfWeek::Monday, DayOfWeek::Tuesday]
        );
    }

    #[test]
    fn remove_by_index() {
        let mut session = Session::new();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "9:00 AM", "5:00 PM", 1.0))
            .unwrap();
        session
            .add_ruleset(ruleset(DayOfWeek::Tuesday, "9:00 AM", "5:00 PM", 1.0))
            .unwrap();

        let removed = session.remove_ruleset(0).expect("index in range");
        assert_eq!(removed.day_of_week, DayOfWeek::Monday);
        assert_eq!(session.rulesets().len(), 1);
        assert!(session.remove_ruleset(5).is_none());
    }

    #[test]
    fn sample_data_loads_once() {
        let mut session = Session::new();
        let added = session.load_sample_data();
        assert_eq!(added, 7);
        assert_eq!(session.load_sample_data(), 0);
        assert_eq!(session.rulesets().len(), 7);
    }

    #[test]
    fn clearing_rulesets_rearms_sample_data() {
        let mut session = Session::new();
        session.load_sample_data();
        session.clear_rulesets();
        assert!(session.rulesets().is_empty());
        assert_eq!(session.load_sample_data(), 7);
    }

    #[test]
    fn conflicting_samples_are_skipped() {
        let mut session = Session::new();
        // User ruleset covering Saturday morning conflicts with the
        // Saturday sample.
        session
            .add_ruleset(ruleset(DayOfWeek::Saturday, "8:00 AM", "12:00 PM", 2.0))
            .unwrap();

        let added = session.load_sample_data();
        assert_eq!(added, 6);
        assert_eq!(session.rulesets().len(), 7);
    }

    #[test]
    fn total_recomputes_after_mutation() {
        let mut session = Session::new();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "9:00 AM", "5:00 PM", 1.5))
            .unwrap();
        session
            .add_period(period("2024-01-15", "9:00 AM", "5:00 PM"))
            .unwrap();
        assert!((session.total() - 12.0).abs() < 1e-9);

        session.clear_periods();
        assert!(session.total().abs() < 1e-9);
    }

    #[test]
    fn rejected_period_does_not_affect_total() {
        let mut session = Session::new();
        session
            .add_ruleset(ruleset(DayOfWeek::Monday, "9:00 AM", "5:00 PM", 1.0))
            .unwrap();
        session
            .add_period(period("2024-01-15", "9:00 AM", "1:00 PM"))
            .unwrap();
        assert!(
            session
                .add_period(period("2024-01-15", "12:00 PM", "3:00 PM"))
                .is_err()
        );
        assert!((session.total() - 4.0).abs() < 1e-9);
    }
}
