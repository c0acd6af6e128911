//! Check command: report conflicting entries in an input document.

use std::io::Write;

use anyhow::Result;

use crate::document::Document;

/// Replays the document and prints each rejected entry with its position.
///
/// Returns the number of conflicts; the caller turns a non-zero count into
/// a failing exit status.
pub fn run<W: Write>(writer: &mut W, document: Document) -> Result<usize> {
    let (session, conflicts) = document.replay();

    if conflicts.is_empty() {
        writeln!(
            writer,
            "ok: {} rulesets, {} hours entries",
            session.rulesets().len(),
            session.periods().len()
        )?;
        return Ok(0);
    }

    for conflict in &conflicts {
        writeln!(writer, "rejected {conflict}")?;
    }
    Ok(conflicts.len())
}
