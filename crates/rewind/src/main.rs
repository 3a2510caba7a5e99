//! Rewind - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::{AppConfig, replay, tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_tracing(&config)?;
            tui::run(&config)
        }
        Command::Replay { script, json } => {
            init_stderr_tracing(&config);
            info!(script = %script.display(), json, "Replaying script");
            replay::run(&script, json)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to a file so output does not corrupt the alternate screen.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Creating log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}
