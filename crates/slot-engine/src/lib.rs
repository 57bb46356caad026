//! # slot-engine
//!
//! Free/busy interval arithmetic for a single working day.
//!
//! Given day records (a date plus its working window) and booking records,
//! the engine answers which parts of a day are free, whether a requested range
//! is available, and where a slot of a given length can be placed. All
//! comparisons run on integer minutes of the day; results come back as
//! `"HH:MM"` text.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{AvailabilityEngine, Schedule};
//!
//! let json = r#"{
//!     "days": [{"id": 1, "date": "2024-10-10", "start": "09:00", "end": "18:00"}],
//!     "timeslots": [{"id": 1, "day_id": 1, "start": "11:00", "end": "12:00"}]
//! }"#;
//! let engine = AvailabilityEngine::new(Schedule::from_json(json).unwrap());
//!
//! let free = engine.free_time("2024-10-10").unwrap();
//! assert_eq!(free[0].start, "09:00");
//! assert_eq!(free[0].end, "11:00");
//! assert!(engine.is_time_available("2024-10-10", "12:00", "13:00").unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `"HH:MM"` ⇄ minutes since midnight
//! - [`interval`] — minute intervals and their text encoding
//! - [`schedule`] — day/booking records and lookup by date or day id
//! - [`freebusy`] — free gaps, merged busy periods, first-fit placement
//! - [`availability`] — date-keyed queries over a schedule
//! - [`error`] — Error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod schedule;
pub mod time;

pub use availability::AvailabilityEngine;
pub use error::SlotError;
pub use interval::{Interval, TimeRange};
pub use schedule::{BookingRecord, DayRecord, Schedule, ScheduleSnapshot};
