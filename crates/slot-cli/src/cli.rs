//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "slots",
    version,
    about = "Query free and busy time in a day schedule"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Schedule endpoint URL (overrides the configured `source_url`)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Read the schedule from a local JSON file instead of the endpoint
    #[arg(long, global = true, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every day record
    Days,
    /// Show bookings for a day as stored
    Busy {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show bookings merged into non-overlapping blocks
    Blocks {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show free gaps in the working window
    Free {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Check whether a time range is available
    Check {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Range start (HH:MM)
        #[arg(long)]
        start: String,
        /// Range end (HH:MM)
        #[arg(long)]
        end: String,
    },
    /// Find a free slot of the given length
    Find {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Slot length in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,
        /// List every gap that fits instead of the first one
        #[arg(long)]
        all: bool,
    },
}
