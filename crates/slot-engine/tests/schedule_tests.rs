//! Tests for snapshot decoding and day/booking lookup.

use slot_engine::schedule::{BookingRecord, DayRecord, Schedule};
use slot_engine::SlotError;

fn day(id: i64, date: &str, start: &str, end: &str) -> DayRecord {
    DayRecord {
        id,
        date: date.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

fn booking(id: i64, day_id: i64, start: &str, end: &str) -> BookingRecord {
    BookingRecord {
        id,
        day_id,
        start: start.to_string(),
        end: end.to_string(),
    }
}

#[test]
fn finds_day_by_exact_date() {
    let schedule = Schedule::new(
        vec![
            day(1, "2024-10-10", "09:00", "18:00"),
            day(2, "2024-10-11", "08:00", "17:00"),
        ],
        vec![],
    );

    assert_eq!(schedule.find_day_by_date("2024-10-11").unwrap().id, 2);
    assert!(schedule.find_day_by_date("2024-10-12").is_none());
    assert!(schedule.find_day_by_date("2024-10-1").is_none());
}

#[test]
fn duplicate_dates_resolve_to_first_in_order() {
    let schedule = Schedule::new(
        vec![
            day(7, "2024-10-10", "09:00", "12:00"),
            day(3, "2024-10-10", "13:00", "18:00"),
        ],
        vec![],
    );

    assert_eq!(schedule.find_day_by_date("2024-10-10").unwrap().id, 7);
}

#[test]
fn bookings_for_day_keep_source_order() {
    let schedule = Schedule::new(
        vec![day(1, "2024-10-10", "09:00", "18:00")],
        vec![
            booking(10, 1, "14:00", "15:00"),
            booking(11, 2, "09:00", "10:00"),
            booking(12, 1, "10:00", "11:00"),
        ],
    );

    let ids: Vec<i64> = schedule.bookings_for_day(1).iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![10, 12]);
    assert!(schedule.bookings_for_day(99).is_empty());
}

#[test]
fn decodes_snapshot_json() {
    let json = r#"{
        "days": [{"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"}],
        "timeslots": [{"id": 5, "day_id": 1, "start": "11:00", "end": "12:00"}]
    }"#;

    let schedule = Schedule::from_json(json).unwrap();

    assert_eq!(schedule.days(), &[day(1, "2024-10-10", "09:00", "18:00")]);
    assert_eq!(schedule.bookings(), &[booking(5, 1, "11:00", "12:00")]);
}

#[test]
fn missing_collections_decode_as_empty() {
    let schedule = Schedule::from_json("{}").unwrap();
    assert!(schedule.days().is_empty());
    assert!(schedule.bookings().is_empty());

    let schedule = Schedule::from_json(
        r#"{"days": [{"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"}]}"#,
    )
    .unwrap();
    assert_eq!(schedule.days().len(), 1);
    assert!(schedule.bookings().is_empty());
}

#[test]
fn missing_day_field_fails_construction() {
    let json = r#"{
        "days": [
            {"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"},
            {"id": 2, "start": "08:00", "end": "17:00"}
        ]
    }"#;

    let err = Schedule::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        SlotError::MissingField {
            record: "day",
            index: 1,
            field: "date"
        }
    ));
}

#[test]
fn missing_booking_field_fails_construction() {
    let json = r#"{
        "days": [],
        "timeslots": [{"id": 1, "start": "11:00", "end": "12:00"}]
    }"#;

    let err = Schedule::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        SlotError::MissingField {
            record: "timeslot",
            index: 0,
            field: "day_id"
        }
    ));
    assert_eq!(err.to_string(), "Missing field `day_id` in timeslot #0");
}

#[test]
fn malformed_time_text_is_accepted_at_construction() {
    let json = r#"{
        "days": [{"id": 1, "date": "2024-10-10", "start": "nine", "end": "18:00"}]
    }"#;

    assert!(Schedule::from_json(json).is_ok());
}

#[test]
fn invalid_json_is_reported() {
    let err = Schedule::from_json("{not json").unwrap_err();
    assert!(matches!(err, SlotError::Json(_)));
}
