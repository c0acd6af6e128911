//! Insertion-time validation for rulesets and worked periods.
//!
//! Validation outcomes are returned as values so the caller can surface
//! the message inline; nothing here panics or mutates. The caller performs
//! the actual insertion only on accept.

use thiserror::Error;

use crate::ruleset::Ruleset;
use crate::worked::WorkedPeriod;

/// Why a candidate ruleset was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesetConflict {
    #[error("The new ruleset exactly matches an existing ruleset.")]
    Duplicate,

    #[error("The new ruleset overlaps with an existing ruleset.")]
    Overlap,
}

/// Why a candidate worked period was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkedPeriodConflict {
    #[error("Start time and end time cannot be the same.")]
    ZeroLength,

    #[error("End time cannot be before start time.")]
    Inverted,

    #[error("The entered hours exactly match hours you have already added.")]
    Duplicate,

    #[error("The entered hours overlap with hours you have already added.")]
    Overlap,
}

/// Checks a candidate ruleset against the existing collection.
///
/// Only rulesets on the candidate's day are considered. Exact matches are
/// reported before overlaps: an exact match always overlaps, so checking
/// overlap first would make the duplicate message unreachable (the
/// original application had exactly that latent bug).
pub fn validate_new_ruleset(
    candidate: &Ruleset,
    existing: &[Ruleset],
) -> Result<(), RulesetConflict> {
    let same_day = existing
        .iter()
        .filter(|ruleset| ruleset.day_of_week == candidate.day_of_week);

    for ruleset in same_day {
        if candidate.interval.matches_exactly(&ruleset.interval) {
            return Err(RulesetConflict::Duplicate);
        }
        if candidate.interval.overlaps(&ruleset.interval) {
            return Err(RulesetConflict::Overlap);
        }
    }

    Ok(())
}

/// Checks a candidate worked period against the existing collection.
///
/// The candidate's own interval is checked first (zero-length, inverted),
/// then conflicts against periods on the same date, duplicates before
/// overlaps as above. Comparisons go through minute values, never raw
/// string order.
pub fn validate_new_worked_period(
    candidate: &WorkedPeriod,
    existing: &[WorkedPeriod],
) -> Result<(), WorkedPeriodConflict> {
    if candidate.interval.start == candidate.interval.end {
        return Err(WorkedPeriodConflict::ZeroLength);
    }
    if candidate.interval.start > candidate.interval.end {
        return Err(WorkedPeriodConflict::Inverted);
    }

    let same_date = existing.iter().filter(|period| period.date == candidate.date);

    for period in same_date {
        if candidate.interval.matches_exactly(&period.interval) {
            return Err(WorkedPeriodConflict::Duplicate);
        }
        if candidate.interval.overlaps(&period.interval) {
            return Err(WorkedPeriodConflict::Overlap);
        }
    }

    Ok(())
}
