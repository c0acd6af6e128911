//! The JSON input document and its replay into a session.
//!
//! A document carries rulesets and worked hours in the wire forms defined
//! by toil-core (flat objects with `H:MM AM/PM` times and ISO dates).
//! Loading a document replays every entry through insertion validation,
//! exactly as if the user had submitted them one at a time.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toil_core::{Ruleset, Session, WorkedPeriod};

/// Parsed input document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub rulesets: Vec<Ruleset>,

    #[serde(default)]
    pub hours: Vec<WorkedPeriod>,
}

/// A document entry rejected during replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Which array the entry came from.
    pub section: Section,
    /// Index within that array.
    pub index: usize,
    /// The user-facing rejection message.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Rulesets,
    Hours,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rulesets => write!(f, "rulesets"),
            Self::Hours => write!(f, "hours"),
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.section, self.index, self.message)
    }
}

impl Document {
    /// Reads and parses a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Replays the document into a session, entry by entry in document
    /// order. Rejected entries are reported and skipped; accepted entries
    /// remain in the session.
    #[must_use]
    pub fn replay(self) -> (Session, Vec<Conflict>) {
        let mut session = Session::new();
        let mut conflicts = Vec::new();

        for (index, ruleset) in self.rulesets.into_iter().enumerate() {
            // Conflict detection is only meaningful over forward windows;
            // the input layer owns this check for rulesets.
            if ruleset.interval.duration_minutes() <= 0 {
                conflicts.push(Conflict {
                    section: Section::Rulesets,
                    index,
                    message: "End time must be after start time.".to_string(),
                });
                continue;
            }
            if let Err(conflict) = session.add_ruleset(ruleset) {
                conflicts.push(Conflict {
                    section: Section::Rulesets,
                    index,
                    message: conflict.to_string(),
                });
            }
        }
        for (index, period) in self.hours.into_iter().enumerate() {
            if let Err(conflict) = session.add_period(period) {
                conflicts.push(Conflict {
                    section: Section::Hours,
                    index,
                    message: conflict.to_string(),
                });
            }
        }

        tracing::debug!(
            rulesets = session.rulesets().len(),
            periods = session.periods().len(),
            rejected = conflicts.len(),
            "document replayed"
        );
        (session, conflicts)
    }
}
