//! `slots` CLI — query free and busy time in a day schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Free gaps for a date, fetched from the configured endpoint
//! slots free --date 2024-10-10
//!
//! # Same, from a local snapshot file, as JSON
//! slots --file schedule.json --json free --date 2024-10-10
//!
//! # Is 12:30-13:30 open?
//! slots check --date 2024-10-10 --start 12:30 --end 13:30
//!
//! # First 90-minute slot (or every one with --all)
//! slots find --date 2024-10-10 --duration 90
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slot_cli::{execute, load_engine, source_for, Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let source = source_for(&cli, &config);
    let engine = load_engine(source.as_ref()).context("failed to load schedule")?;

    let out = execute(&engine, &cli.command, cli.json)?;
    print!("{}", out);

    Ok(())
}
