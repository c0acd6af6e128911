//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Time Off In Lieu calculator.
///
/// Reads rulesets and worked hours from a JSON document and computes the
/// total weighted TOIL.
#[derive(Debug, Parser)]
#[command(name = "toil", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute total weighted TOIL hours from an input document.
    Total {
        /// Input document (overrides the configured path).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Merge the sample rulesets before computing.
        #[arg(long)]
        sample: bool,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate an input document, reporting conflicting entries.
    Check {
        /// Input document (overrides the configured path).
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the sample ruleset set.
    Sample {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
