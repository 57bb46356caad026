//! Compute free gaps and merged busy periods from minute intervals.
//!
//! Busy intervals are stable-sorted by start, then swept left to right with a
//! cursor that only moves forward, so overlapping or nested bookings never
//! yield duplicate or negative-length gaps.

use crate::interval::Interval;

/// Stable sort by start; bookings sharing a start keep their source order.
fn sorted_by_start(busy: &[Interval]) -> Vec<Interval> {
    let mut sorted = busy.to_vec();
    sorted.sort_by_key(|interval| interval.start);
    sorted
}

/// Find the free gaps of `window` not covered by any busy interval.
///
/// Gaps are chronological, non-overlapping and confined to the window: a
/// booking starting after `window.end` ends the last gap at `window.end`, not
/// at the booking's start.
/// Returns an empty list when the window is booked edge to edge.
pub fn free_gaps(window: Interval, busy: &[Interval]) -> Vec<Interval> {
    let mut gaps = Vec::new();
    let mut cursor = window.start;

    for interval in sorted_by_start(busy) {
        if interval.start > cursor {
            let gap = Interval::new(cursor, interval.start.min(window.end));
            if !gap.is_empty() {
                gaps.push(gap);
            }
        }
        cursor = cursor.max(interval.end);
    }

    // Trailing gap after the last booking.
    if cursor < window.end {
        gaps.push(Interval::new(cursor, window.end));
    }

    gaps
}

/// Merge overlapping or adjacent busy periods, clipped to `window`.
///
/// Returns a sorted, non-overlapping list; intervals entirely outside the
/// window are discarded.
pub fn merge_busy_periods(window: Interval, busy: &[Interval]) -> Vec<Interval> {
    let clipped: Vec<Interval> = busy
        .iter()
        .filter(|interval| interval.overlaps(&window))
        .map(|interval| {
            Interval::new(
                interval.start.max(window.start),
                interval.end.min(window.end),
            )
        })
        .collect();

    let mut merged: Vec<Interval> = Vec::new();
    for interval in sorted_by_start(&clipped) {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// Place `duration` minutes at the start of the first gap long enough to hold it.
///
/// Returns `None` for a zero duration or when no gap fits.
pub fn first_fit(gaps: &[Interval], duration: i64) -> Option<Interval> {
    fits(gaps, duration).next()
}

/// Every placement of `duration` minutes anchored at the start of a fitting gap.
pub fn all_fits(gaps: &[Interval], duration: i64) -> Vec<Interval> {
    fits(gaps, duration).collect()
}

fn fits(gaps: &[Interval], duration: i64) -> impl Iterator<Item = Interval> + '_ {
    gaps.iter()
        .filter(move |gap| duration > 0 && gap.duration_minutes() >= duration)
        .map(move |gap| Interval::new(gap.start, gap.start + duration))
}
