//! Minute-based intervals and their text encoding.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time;

/// A half-open `[start, end)` range in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Parse a pair of `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: time::to_minutes(start)?,
            end: time::to_minutes(end)?,
        })
    }

    /// Length in minutes; zero for empty or inverted intervals.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Touching intervals (one ends exactly where the other starts) do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely inside `self`, boundaries included.
    pub fn contains(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// An interval re-encoded as `"HH:MM"` text for callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    pub duration_minutes: i64,
}

impl From<Interval> for TimeRange {
    fn from(interval: Interval) -> Self {
        Self {
            start: time::to_text(interval.start),
            end: time::to_text(interval.end),
            duration_minutes: interval.duration_minutes(),
        }
    }
}
