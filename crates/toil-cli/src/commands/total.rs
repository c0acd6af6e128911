//! Total command: compute weighted TOIL hours for an input document.

use std::io::Write;

use anyhow::{Result, bail};
use serde::Serialize;
use toil_core::leave_days;

use crate::document::Document;

/// JSON output shape for `toil total --json`.
#[derive(Debug, Serialize)]
struct TotalReport {
    total_hours: f64,
    leave_days: f64,
    ruleset_count: usize,
    period_count: usize,
}

/// Computes and prints the total.
///
/// A document with conflicting entries is rejected outright; `toil check`
/// exists to pinpoint the offending entries. With `with_sample`, the
/// sample rulesets are appended after the document's own (user rulesets
/// keep first-match priority).
pub fn run<W: Write>(writer: &mut W, document: Document, with_sample: bool, json: bool) -> Result<()> {
    let (mut session, conflicts) = document.replay();
    if !conflicts.is_empty() {
        bail!(
            "input document has {} conflicting {}; run `toil check` for details",
            conflicts.len(),
            if conflicts.len() == 1 { "entry" } else { "entries" }
        );
    }

    if with_sample {
        let added = session.load_sample_data();
        tracing::debug!(added, "merged sample rulesets");
    }

    let total = session.total();
    let leave = leave_days(total);

    if json {
        let report = TotalReport {
            total_hours: total,
            leave_days: leave,
            ruleset_count: session.rulesets().len(),
            period_count: session.periods().len(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(writer, "Total TOIL: {total} hours")?;
        writeln!(writer, "Leave: {leave} days (on a 7.6 hour work day)")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn document(json: &str) -> Document {
        serde_json::from_str(json).expect("well-formed document")
    }

    const CLEAN: &str = r#"{
        "rulesets": [
            {"name": "Weekday Overtime", "dayOfWeek": "Monday",
             "startTime": "9:00 AM", "endTime": "5:00 PM", "multiplier": 1.5}
        ],
        "hours": [
            {"date": "2024-01-15", "startTime": "9:00 AM", "endTime": "5:00 PM"}
        ]
    }"#;

    #[test]
    fn human_output_shows_total_and_leave() {
        let mut output = Vec::new();
        run(&mut output, document(CLEAN), false, false).unwrap();
        let output = String::from_utf8(output).unwrap();
        // 12 hours / 7.6-hour workday = 1.58 days
        assert_snapshot!(output, @r"
        Total TOIL: 12 hours
        Leave: 1.58 days (on a 7.6 hour work day)
        ");
    }

    #[test]
    fn json_output() {
        let mut output = Vec::new();
        run(&mut output, document(CLEAN), false, true).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["total_hours"], serde_json::json!(12.0));
        assert_eq!(report["leave_days"], serde_json::json!(1.58));
        assert_eq!(report["ruleset_count"], serde_json::json!(1));
        assert_eq!(report["period_count"], serde_json::json!(1));
    }

    #[test]
    fn conflicting_document_is_rejected() {
        let conflicting = document(
            r#"{
                "rulesets": [
                    {"name": "First", "dayOfWeek": "Monday",
                     "startTime": "9:00 AM", "endTime": "5:00 PM", "multiplier": 1},
                    {"name": "Second", "dayOfWeek": "Monday",
                     "startTime": "9:00 AM", "endTime": "5:00 PM", "multiplier": 1}
                ]
            }"#,
        );
        let mut output = Vec::new();
        let err = run(&mut output, conflicting, false, false).unwrap_err();
        assert!(err.to_string().contains("1 conflicting entry"));
    }

    #[test]
    fn sample_rulesets_cover_unmatched_hours() {
        let hours_only = document(
            r#"{
                "hours": [
                    {"date": "2024-01-21", "startTime": "9:00 AM", "endTime": "1:00 PM"}
                ]
            }"#,
        );
        let mut output = Vec::new();
        // 2024-01-21 is a Sunday: 4 hours x 2.0 under the sample set.
        run(&mut output, hours_only, true, false).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Total TOIL: 8 hours
        Leave: 1.05 days (on a 7.6 hour work day)
        ");
    }
}
