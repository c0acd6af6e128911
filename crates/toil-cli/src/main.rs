use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toil_cli::commands::{check, sample, total};
use toil_cli::document::Document;
use toil_cli::{Cli, Commands, Config};

/// Resolve the input document path: CLI flag wins over config.
fn load_document(config_path: Option<&Path>, input: Option<PathBuf>) -> Result<Document> {
    let path = match input {
        Some(path) => path,
        None => {
            let config = Config::load_from(config_path).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");
            config.input_path
        }
    };
    Document::load(&path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Total {
            input,
            sample: with_sample,
            json,
        }) => {
            let document = load_document(cli.config.as_deref(), input)?;
            total::run(&mut stdout, document, with_sample, json)?;
        }
        Some(Commands::Check { input }) => {
            let document = load_document(cli.config.as_deref(), input)?;
            let conflicts = check::run(&mut stdout, document)?;
            if conflicts > 0 {
                bail!(
                    "{conflicts} conflicting {} rejected",
                    if conflicts == 1 { "entry" } else { "entries" }
                );
            }
        }
        Some(Commands::Sample { json }) => {
            sample::run(&mut stdout, json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
