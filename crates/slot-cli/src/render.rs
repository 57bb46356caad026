//! Human-readable and JSON rendering of query results.

use serde::Serialize;
use serde_json::json;
use slot_engine::{BookingRecord, DayRecord, TimeRange};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|s| s + "\n")
}

pub fn days(days: &[DayRecord], bookings: &[BookingRecord]) -> String {
    if days.is_empty() {
        return "No days scheduled.\n".to_string();
    }
    days.iter()
        .map(|d| {
            let booked = bookings.iter().filter(|b| b.day_id == d.id).count();
            format!(
                "{}  {}-{}  (day {}, {} booked)\n",
                d.date, d.start, d.end, d.id, booked
            )
        })
        .collect()
}

pub fn bookings(date: &str, bookings: &[&BookingRecord]) -> String {
    if bookings.is_empty() {
        return format!("No bookings on {date}.\n");
    }
    bookings
        .iter()
        .map(|b| format!("{}-{}  (booking {})\n", b.start, b.end, b.id))
        .collect()
}

pub fn ranges(date: &str, ranges: &[TimeRange], empty: &str) -> String {
    if ranges.is_empty() {
        return format!("{empty} on {date}.\n");
    }
    ranges
        .iter()
        .map(|r| format!("{}-{}  ({} min)\n", r.start, r.end, r.duration_minutes))
        .collect()
}

pub fn check(
    date: &str,
    start: &str,
    end: &str,
    available: bool,
    conflicts: &[&BookingRecord],
) -> String {
    let mut out = if available {
        format!("{date} {start}-{end} is available\n")
    } else {
        format!("{date} {start}-{end} is not available\n")
    };
    for b in conflicts {
        out.push_str(&format!("  conflicts with {}-{}  (booking {})\n", b.start, b.end, b.id));
    }
    out
}

pub fn check_json(available: bool, conflicts: &[&BookingRecord]) -> serde_json::Value {
    json!({
        "available": available,
        "conflicts": conflicts,
    })
}

pub fn slot(date: &str, duration: i64, slot: Option<&TimeRange>) -> String {
    match slot {
        Some(r) => format!("{}-{}\n", r.start, r.end),
        None => format!("No free slot of {duration} min on {date}.\n"),
    }
}
