//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A wall-clock string could not be split into two integer components.
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// A day or booking entry in the snapshot lacks a required field.
    #[error("Missing field `{field}` in {record} #{index}")]
    MissingField {
        record: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
