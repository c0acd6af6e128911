//! Core domain logic for the TOIL calculator.
//!
//! This crate contains the fundamental types and logic for:
//! - Time values: parsing `H:MM AM/PM` strings into comparable minutes
//! - Interval relations: overlap and exact-match checks
//! - Validation: rejecting conflicting rulesets and worked periods
//! - Aggregation: summing worked hours against rulesets into weighted TOIL

mod aggregate;
pub mod day;
pub mod interval;
pub mod ruleset;
pub mod session;
pub mod time;
pub mod validate;
pub mod worked;

pub use aggregate::{HOURS_PER_WORKDAY, leave_days, total_weighted_hours};
pub use day::{DayOfWeek, UnknownDayOfWeek};
pub use interval::Interval;
pub use ruleset::{Multiplier, Ruleset, RulesetName, ValidationError, sample_rulesets};
pub use session::Session;
pub use time::{MalformedTime, TimeOfDay};
pub use validate::{
    RulesetConflict, WorkedPeriodConflict, validate_new_ruleset, validate_new_worked_period,
};
pub use worked::WorkedPeriod;
