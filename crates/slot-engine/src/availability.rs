//! Date-keyed availability queries over an immutable [`Schedule`].
//!
//! Every query first resolves its date. A date with no day record is the
//! ordinary "nothing scheduled" case and yields an empty list, `false`, or
//! `None`; it is never an error. Errors come only from time text that fails
//! to parse, whether it belongs to a stored record or to the query itself.

use crate::error::Result;
use crate::freebusy;
use crate::interval::{Interval, TimeRange};
use crate::schedule::{BookingRecord, DayRecord, Schedule};

/// Free/busy engine for a fixed snapshot of days and bookings.
///
/// Holds no mutable state: every method is a pure function of the snapshot
/// and its arguments, so a shared reference can be queried from any thread.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityEngine {
    schedule: Schedule,
}

impl AvailabilityEngine {
    pub fn new(schedule: Schedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Bookings for `date` in source order, neither sorted nor merged.
    pub fn busy_slots(&self, date: &str) -> Vec<&BookingRecord> {
        match self.schedule.find_day_by_date(date) {
            Some(day) => self.schedule.bookings_for_day(day.id),
            None => Vec::new(),
        }
    }

    /// Free gaps of the working window for `date`, chronological.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimeFormat` if the day or one of its
    /// bookings carries malformed time text.
    pub fn free_time(&self, date: &str) -> Result<Vec<TimeRange>> {
        Ok(self
            .free_intervals(date)?
            .into_iter()
            .map(TimeRange::from)
            .collect())
    }

    /// Whether `[start, end)` fits inside the working window without touching
    /// any booking.
    ///
    /// Inverted or empty ranges, ranges leaving the window, and ranges that
    /// overlap a booking are all unavailable. A range that merely touches a
    /// booking boundary is available.
    pub fn is_time_available(&self, date: &str, start: &str, end: &str) -> Result<bool> {
        let Some(day) = self.schedule.find_day_by_date(date) else {
            return Ok(false);
        };

        let requested = Interval::parse(start, end)?;
        if requested.is_empty() {
            return Ok(false);
        }

        let window = work_window(day)?;
        if !window.contains(&requested) {
            return Ok(false);
        }

        for booking in self.schedule.bookings_for_day(day.id) {
            if Interval::parse(&booking.start, &booking.end)?.overlaps(&requested) {
                tracing::debug!(date, booking = booking.id, "requested range overlaps booking");
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// The first `duration_minutes` slot anchored at the start of a free gap.
    ///
    /// Returns `None` for a non-positive duration, an unknown date, or when
    /// no gap is long enough.
    pub fn find_free_slot_for_duration(
        &self,
        date: &str,
        duration_minutes: i64,
    ) -> Result<Option<TimeRange>> {
        let Some(duration) = positive_duration(duration_minutes) else {
            return Ok(None);
        };
        let gaps = self.free_intervals(date)?;
        Ok(freebusy::first_fit(&gaps, duration).map(TimeRange::from))
    }

    /// Every free gap able to hold `duration_minutes`, each clipped to the
    /// requested duration from the gap's start.
    pub fn find_all_slots_for_duration(
        &self,
        date: &str,
        duration_minutes: i64,
    ) -> Result<Vec<TimeRange>> {
        let Some(duration) = positive_duration(duration_minutes) else {
            return Ok(Vec::new());
        };
        let gaps = self.free_intervals(date)?;
        Ok(freebusy::all_fits(&gaps, duration)
            .into_iter()
            .map(TimeRange::from)
            .collect())
    }

    /// Bookings for `date` merged into non-overlapping blocks inside the
    /// working window. Adjacent bookings join into one block.
    pub fn busy_blocks(&self, date: &str) -> Result<Vec<TimeRange>> {
        let Some(day) = self.schedule.find_day_by_date(date) else {
            return Ok(Vec::new());
        };
        let window = work_window(day)?;
        let busy = self.booking_intervals(day)?;
        Ok(freebusy::merge_busy_periods(window, &busy)
            .into_iter()
            .map(TimeRange::from)
            .collect())
    }

    /// Bookings for `date` overlapping `[start, end)`, in source order.
    pub fn conflicts(&self, date: &str, start: &str, end: &str) -> Result<Vec<&BookingRecord>> {
        let Some(day) = self.schedule.find_day_by_date(date) else {
            return Ok(Vec::new());
        };
        let requested = Interval::parse(start, end)?;
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let mut conflicting = Vec::new();
        for booking in self.schedule.bookings_for_day(day.id) {
            if Interval::parse(&booking.start, &booking.end)?.overlaps(&requested) {
                conflicting.push(booking);
            }
        }
        Ok(conflicting)
    }

    fn free_intervals(&self, date: &str) -> Result<Vec<Interval>> {
        let Some(day) = self.schedule.find_day_by_date(date) else {
            tracing::debug!(date, "no day record");
            return Ok(Vec::new());
        };
        let window = work_window(day)?;
        let busy = self.booking_intervals(day)?;
        let gaps = freebusy::free_gaps(window, &busy);
        tracing::debug!(date, bookings = busy.len(), gaps = gaps.len(), "computed free gaps");
        Ok(gaps)
    }

    fn booking_intervals(&self, day: &DayRecord) -> Result<Vec<Interval>> {
        self.schedule
            .bookings_for_day(day.id)
            .into_iter()
            .map(|booking| Interval::parse(&booking.start, &booking.end))
            .collect()
    }
}

fn work_window(day: &DayRecord) -> Result<Interval> {
    Interval::parse(&day.start, &day.end)
}

fn positive_duration(duration_minutes: i64) -> Option<i64> {
    (duration_minutes > 0).then_some(duration_minutes)
}
