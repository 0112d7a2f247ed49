//! Contact Book - Main entry point
//!
//! Runs the command-line assistant over an in-memory address book.

use anyhow::{Context, Result};
use contact_book::{assistant, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut assistant = Assistant::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = assistant::run(&mut assistant, &config.prompt, stdin.lock(), stdout.lock()) {
        error!("Assistant loop failed: {}", e);
        return Err(e.into());
    }

    info!(contacts = assistant.book().len(), "Assistant shutdown complete");
    Ok(())
}
