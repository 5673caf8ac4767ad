//! Contact Assistant - Main entry point
//!
//! Wires configuration, logging, and the in-memory address book together
//! and hands control to the REPL over stdin/stdout.

use anyhow::Result;
use contact_assistant::{repl, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only so stdout stays clean for replies)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact assistant with a {}-day birthday window",
        config.upcoming_window_days
    );

    // The address book is constructed here and passed down explicitly
    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut book, &config, stdin.lock(), stdout.lock())?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
