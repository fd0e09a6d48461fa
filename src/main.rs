//! snipvault - grouped snippet manager
//!
//! Keeps code and terminal snippets in named groups inside a single
//! `snippets.json`, resolves `{$name}` placeholders by prompting, and can
//! insert the result into a file or run it in a shell.
//!
//! Also ships two small helpers: a searchable Phosphor icon catalog and
//! fold-line selection for source files.

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::SnippetError;
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod folding;
mod handlers;
mod icons;
mod manager;
mod models;
mod placeholder;
mod search;

/// Application entry point: parse arguments, load settings, set up logging
/// and run the requested command
fn main() -> Result<ExitCode, Box<dyn Error>> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings = Settings::load()?;
    init_tracing(cli.verbose, &settings.log_level)?;

    let Err(err) = cli::execute_cli(cli, settings) else {
        return Ok(ExitCode::SUCCESS);
    };

    match err.downcast_ref::<SnippetError>() {
        Some(e) if e.is_cancelled() => {
            tracing::debug!("Cancelled by user");
            return Ok(ExitCode::SUCCESS);
        }
        Some(SnippetError::Io { .. }) | None => {}
        Some(_) => {
            eprintln!("{}  {}", "┃".bright_magenta(), format!("Error: {:#}", err).red());
            return Ok(ExitCode::FAILURE);
        }
    }
    Err(err.into())
}

/// `RUST_LOG` wins, then `-v` flags, then the configured level
fn init_tracing(verbose: u8, configured: &str) -> Result<(), Box<dyn Error>> {
    let level = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| -> Box<dyn Error> { e })?;
    Ok(())
}
