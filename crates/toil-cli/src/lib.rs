//! TOIL calculator CLI library.
//!
//! This crate provides the CLI interface for the TOIL calculator.

mod cli;
pub mod commands;
mod config;
pub mod document;

pub use cli::{Cli, Commands};
pub use config::Config;
