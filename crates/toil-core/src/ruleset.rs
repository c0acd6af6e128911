//! Ruleset definitions with validated fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::day::DayOfWeek;
use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Validation errors for ruleset fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The ruleset name was too short.
    #[error("ruleset name must be at least 2 characters, got {length}")]
    NameTooShort { length: usize },

    /// The multiplier was negative or not a number.
    #[error("multiplier must be a non-negative number, got {value}")]
    InvalidMultiplier { value: f64 },
}

/// A validated ruleset name: at least two characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RulesetName(String);

impl RulesetName {
    /// Creates a name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let length = name.chars().count();
        if length < 2 {
            return Err(ValidationError::NameTooShort { length });
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RulesetName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RulesetName> for String {
    fn from(name: RulesetName) -> Self {
        name.0
    }
}

impl fmt::Display for RulesetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RulesetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A non-negative weighting factor applied to overlapping hours.
///
/// The input layer historically supplied this as either a number or a
/// numeric string, so deserialization accepts both and normalizes at the
/// boundary. Inside the core the value is strictly numeric.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Multiplier(f64);

impl Multiplier {
    /// Creates a multiplier after validation.
    ///
    /// Returns an error for negative values and NaN.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || value < 0.0 {
            return Err(ValidationError::InvalidMultiplier { value });
        }
        Ok(Self(value))
    }

    /// Returns the inner f64 value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Multiplier {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for f64 {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

impl Serialize for Multiplier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Multiplier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(n) => n,
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid multiplier: {s:?}")))?,
        };
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// A rule mapping a day-of-week and time window to a multiplier.
///
/// Identity for duplicate/overlap detection is `day_of_week` plus the
/// interval; the name and multiplier are labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub name: RulesetName,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: DayOfWeek,
    #[serde(flatten)]
    pub interval: Interval,
    pub multiplier: Multiplier,
}

/// The bulk "sample data" set: typical TOIL rules for out-of-hours work.
#[must_use]
pub fn sample_rulesets() -> Vec<Ruleset> {
    const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    let evenings = Interval::new(TimeOfDay::from_hm(17, 0), TimeOfDay::from_hm(21, 0));
    let daytime = Interval::new(TimeOfDay::from_hm(9, 0), TimeOfDay::from_hm(17, 0));

    let mut rulesets: Vec<Ruleset> = WEEKDAYS
        .into_iter()
        .map(|day| Ruleset {
            name: RulesetName("Weekday Evenings".to_string()),
            day_of_week: day,
            interval: evenings,
            multiplier: Multiplier(1.5),
        })
        .collect();
    rulesets.push(Ruleset {
        name: RulesetName("Saturday".to_string()),
        day_of_week: DayOfWeek::Saturday,
        interval: daytime,
        multiplier: Multiplier(1.5),
    });
    rulesets.push(Ruleset {
        name: RulesetName("Sunday".to_string()),
        day_of_week: DayOfWeek::Sunday,
        interval: daytime,
        multiplier: Multiplier(2.0),
    });
    rulesets
}
