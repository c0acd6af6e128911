//! Sample command: print the built-in sample ruleset set.

use std::io::Write;

use anyhow::Result;
use toil_core::sample_rulesets;

pub fn run<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    let rulesets = sample_rulesets();

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&rulesets)?)?;
        return Ok(());
    }

    for ruleset in &rulesets {
        writeln!(
            writer,
            "- {}: {} {} to {} (x{})",
            ruleset.name,
            ruleset.day_of_week,
            ruleset.interval.start,
            ruleset.interval.end,
            ruleset.multiplier
        )?;
    }
    Ok(())
}
