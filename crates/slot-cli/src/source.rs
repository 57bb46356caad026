//! Where schedule snapshots come from.
//!
//! A source performs one retrieval and hands back the decoded
//! [`ScheduleSnapshot`]. Transport and decoding failures are reported as
//! [`SourceError::DataUnavailable`] before any engine is built.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use slot_engine::ScheduleSnapshot;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("schedule data unavailable from {origin}: {reason}")]
    DataUnavailable { origin: String, reason: String },
}

impl SourceError {
    fn unavailable(origin: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::DataUnavailable {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A single-shot provider of schedule snapshots.
pub trait ScheduleSource {
    fn fetch(&self) -> Result<ScheduleSnapshot, SourceError>;
}

/// Fetches the snapshot with an HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl ScheduleSource for HttpSource {
    fn fetch(&self) -> Result<ScheduleSnapshot, SourceError> {
        tracing::debug!(url = %self.url, "fetching schedule");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| SourceError::unavailable(&self.url, err))?;

        let snapshot: ScheduleSnapshot = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::json::<ScheduleSnapshot>)
            .map_err(|err| SourceError::unavailable(&self.url, err))?;

        tracing::debug!(
            days = snapshot.days.len(),
            timeslots = snapshot.timeslots.len(),
            "schedule fetched"
        );
        Ok(snapshot)
    }
}

/// Reads the snapshot from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for FileSource {
    fn fetch(&self) -> Result<ScheduleSnapshot, SourceError> {
        let origin = self.path.display();
        tracing::debug!(path = %origin, "reading schedule");

        let text = std::fs::read_to_string(&self.path)
            .map_err(|err| SourceError::unavailable(&origin, err))?;
        serde_json::from_str(&text).map_err(|err| SourceError::unavailable(&origin, err))
    }
}
