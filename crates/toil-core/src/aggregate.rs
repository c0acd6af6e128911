//! Weighted-hours aggregation.
//!
//! Sums worked periods against matching rulesets. Each period is matched
//! independently and the result is a plain sum, so the per-period work is
//! fanned out with rayon.

use rayon::prelude::*;

use crate::ruleset::Ruleset;
use crate::worked::WorkedPeriod;

/// Total TOIL in fractional hours for the given snapshot.
///
/// Each period contributes `overlapping hours x multiplier` for the FIRST
/// ruleset (in slice order) whose day matches the period's date and whose
/// window overlaps the period's interval. Rulesets do not stack: later
/// matches are ignored. A period with no matching ruleset contributes
/// zero; unmatched hours are simply not eligible for TOIL.
///
/// No rounding happens here; display formatting is the caller's concern.
#[must_use]
pub fn total_weighted_hours(rulesets: &[Ruleset], periods: &[WorkedPeriod]) -> f64 {
    periods
        .par_iter()
        .map(|period| period_contribution(rulesets, period))
        .sum()
}

/// The standard workday used to convert TOIL hours into days of leave.
pub const HOURS_PER_WORKDAY: f64 = 7.6;

/// Converts a TOIL total into days of leave on a 7.6-hour workday,
/// rounded to two decimal places.
#[must_use]
pub fn leave_days(total_hours: f64) -> f64 {
    (total_hours / HOURS_PER_WORKDAY * 100.0).round() / 100.0
}

fn period_contribution(rulesets: &[Ruleset], period: &WorkedPeriod) -> f64 {
    let day = period.day_of_week();
    let Some(ruleset) = rulesets
        .iter()
        .find(|r| r.day_of_week == day && r.interval.overlaps(&period.interval))
    else {
        tracing::debug!(date = %period.date, %day, "no matching ruleset, period contributes zero");
        return 0.0;
    };

    // Overlapping window between the period and the ruleset. A period that
    // starts before the ruleset window is credited from the window start to
    // the period end, uncapped; that is the established behavior and is
    // preserved as-is.
    let (start, end) = if period.interval.start < ruleset.interval.start {
        (ruleset.interval.start, period.interval.end)
    } else if period.interval.end > ruleset.interval.end {
        (period.interval.start, ruleset.interval.end)
    } else {
        (period.interval.start, period.interval.end)
    };

    let overlapping_hours = f64::from(end.minutes_since(start)) / 60.0;
    overlapping_hours * ruleset.multiplier.value()
}
