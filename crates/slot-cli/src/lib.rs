//! Library side of the `slots` binary: argument parsing, configuration, data
//! sources, and command execution against a [`slot_engine::AvailabilityEngine`].

pub mod cli;
pub mod config;
pub mod render;
pub mod source;

use anyhow::{Context, Result};
use slot_engine::{AvailabilityEngine, Schedule};

pub use cli::{Cli, Commands};
pub use config::Config;
pub use source::{FileSource, HttpSource, ScheduleSource, SourceError};

/// Pick the data source from CLI flags, falling back to configuration.
pub fn source_for(cli: &Cli, config: &Config) -> Box<dyn ScheduleSource> {
    match (&cli.file, &cli.url) {
        (Some(path), _) => Box::new(FileSource::new(path)),
        (None, Some(url)) => Box::new(HttpSource::new(url.clone(), config.timeout())),
        (None, None) => Box::new(HttpSource::new(config.source_url.clone(), config.timeout())),
    }
}

/// Fetch a snapshot and build the engine. Nothing is queried if this fails.
pub fn load_engine(source: &dyn ScheduleSource) -> Result<AvailabilityEngine> {
    let snapshot = source.fetch()?;
    let schedule = Schedule::from_snapshot(snapshot).context("invalid schedule data")?;
    Ok(AvailabilityEngine::new(schedule))
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Run one command and return the text to print.
pub fn execute(engine: &AvailabilityEngine, command: &Commands, json: bool) -> Result<String> {
    let resolve = |date: &Option<String>| date.clone().unwrap_or_else(today);

    let out = match command {
        Commands::Days => {
            let schedule = engine.schedule();
            if json {
                render::to_json(schedule.days())?
            } else {
                render::days(schedule.days(), schedule.bookings())
            }
        }
        Commands::Busy { date } => {
            let date = resolve(date);
            let busy = engine.busy_slots(&date);
            if json {
                render::to_json(&busy)?
            } else {
                render::bookings(&date, &busy)
            }
        }
        Commands::Blocks { date } => {
            let date = resolve(date);
            let blocks = engine
                .busy_blocks(&date)
                .with_context(|| format!("failed to merge bookings for {date}"))?;
            if json {
                render::to_json(&blocks)?
            } else {
                render::ranges(&date, &blocks, "No bookings")
            }
        }
        Commands::Free { date } => {
            let date = resolve(date);
            let free = engine
                .free_time(&date)
                .with_context(|| format!("failed to compute free time for {date}"))?;
            if json {
                render::to_json(&free)?
            } else {
                render::ranges(&date, &free, "No free time")
            }
        }
        Commands::Check { date, start, end } => {
            let date = resolve(date);
            let available = engine
                .is_time_available(&date, start, end)
                .with_context(|| format!("failed to check {start}-{end} on {date}"))?;
            let conflicts = engine
                .conflicts(&date, start, end)
                .with_context(|| format!("failed to check {start}-{end} on {date}"))?;
            if json {
                render::to_json(&render::check_json(available, &conflicts))?
            } else {
                render::check(&date, start, end, available, &conflicts)
            }
        }
        Commands::Find {
            date,
            duration,
            all,
        } => {
            let date = resolve(date);
            let context = || format!("failed to search {date} for {duration} min");
            if *all {
                let slots = engine
                    .find_all_slots_for_duration(&date, *duration)
                    .with_context(context)?;
                if json {
                    render::to_json(&slots)?
                } else {
                    render::ranges(&date, &slots, "No free slots")
                }
            } else {
                let slot = engine
                    .find_free_slot_for_duration(&date, *duration)
                    .with_context(context)?;
                if json {
                    render::to_json(&slot)?
                } else {
                    render::slot(&date, *duration, slot.as_ref())
                }
            }
        }
    };

    Ok(out)
}
