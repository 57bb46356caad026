//! Day and booking records, snapshot decoding, and lookup by date / day id.
//!
//! A [`Schedule`] is built once from a [`ScheduleSnapshot`] and never mutated.
//! Lookups go through indexes built at construction, but always answer the way
//! an in-order scan of the source collections would: the first day with a
//! given date wins, and bookings keep their source order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// The working window for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub id: i64,
    /// Calendar date, compared by exact string equality (e.g. "2024-10-10").
    pub date: String,
    pub start: String,
    pub end: String,
}

/// A reserved interval inside a day's window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: i64,
    /// The [`DayRecord::id`] this booking belongs to.
    pub day_id: i64,
    pub start: String,
    pub end: String,
}

/// Day entry as it appears on the wire; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDay {
    pub id: Option<i64>,
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Booking entry as it appears on the wire; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBooking {
    pub id: Option<i64>,
    pub day_id: Option<i64>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// The payload delivered by a data source: `{ "days": [...], "timeslots": [...] }`.
///
/// Missing collections decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(default)]
    pub days: Vec<RawDay>,
    #[serde(default)]
    pub timeslots: Vec<RawBooking>,
}

fn required<T>(
    value: Option<T>,
    record: &'static str,
    index: usize,
    field: &'static str,
) -> Result<T> {
    value.ok_or(SlotError::MissingField {
        record,
        index,
        field,
    })
}

impl TryFrom<(usize, RawDay)> for DayRecord {
    type Error = SlotError;

    fn try_from((index, raw): (usize, RawDay)) -> Result<Self> {
        Ok(Self {
            id: required(raw.id, "day", index, "id")?,
            date: required(raw.date, "day", index, "date")?,
            start: required(raw.start, "day", index, "start")?,
            end: required(raw.end, "day", index, "end")?,
        })
    }
}

impl TryFrom<(usize, RawBooking)> for BookingRecord {
    type Error = SlotError;

    fn try_from((index, raw): (usize, RawBooking)) -> Result<Self> {
        Ok(Self {
            id: required(raw.id, "timeslot", index, "id")?,
            day_id: required(raw.day_id, "timeslot", index, "day_id")?,
            start: required(raw.start, "timeslot", index, "start")?,
            end: required(raw.end, "timeslot", index, "end")?,
        })
    }
}

/// Immutable collection of days and bookings.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    days: Vec<DayRecord>,
    bookings: Vec<BookingRecord>,
    /// date -> position of the first day carrying it
    by_date: HashMap<String, usize>,
    /// day id -> positions of its bookings, in source order
    by_day_id: HashMap<i64, Vec<usize>>,
}

impl Schedule {
    /// Build a schedule from already-validated records.
    pub fn new(days: Vec<DayRecord>, bookings: Vec<BookingRecord>) -> Self {
        let mut by_date = HashMap::with_capacity(days.len());
        for (pos, day) in days.iter().enumerate() {
            by_date.entry(day.date.clone()).or_insert(pos);
        }

        let mut by_day_id: HashMap<i64, Vec<usize>> = HashMap::new();
        for (pos, booking) in bookings.iter().enumerate() {
            by_day_id.entry(booking.day_id).or_default().push(pos);
        }

        tracing::debug!(
            days = days.len(),
            bookings = bookings.len(),
            "schedule indexed"
        );

        Self {
            days,
            bookings,
            by_date,
            by_day_id,
        }
    }

    /// Validate a wire snapshot and build a schedule from it.
    ///
    /// # Errors
    /// Returns `SlotError::MissingField` for the first day or booking entry
    /// lacking a required field. Time strings are not parsed here.
    pub fn from_snapshot(snapshot: ScheduleSnapshot) -> Result<Self> {
        let days = snapshot
            .days
            .into_iter()
            .enumerate()
            .map(DayRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        let bookings = snapshot
            .timeslots
            .into_iter()
            .enumerate()
            .map(BookingRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(days, bookings))
    }

    /// Decode a JSON snapshot and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ScheduleSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// The first day whose date equals `date` exactly.
    pub fn find_day_by_date(&self, date: &str) -> Option<&DayRecord> {
        self.by_date.get(date).map(|&pos| &self.days[pos])
    }

    /// Bookings referencing `day_id`, in source order.
    pub fn bookings_for_day(&self, day_id: i64) -> Vec<&BookingRecord> {
        self.by_day_id
            .get(&day_id)
            .map(|positions| positions.iter().map(|&pos| &self.bookings[pos]).collect())
            .unwrap_or_default()
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }
}
