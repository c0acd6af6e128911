//! CLI subcommand implementations.

pub mod check;
pub mod sample;
pub mod total;
