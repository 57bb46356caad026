//! Wall-clock text ⇄ minute-of-day conversion.
//!
//! Every comparison in the engine happens on the integer minutes produced here.
//! Parsing checks shape only: hour and minute values are not range-checked, so
//! `"25:00"` becomes 1500 and formats back to `"25:00"`. Either part may carry
//! a sign, so minutes are signed.

use crate::error::{Result, SlotError};

/// Parse `"HH:MM"` into minutes since midnight.
///
/// # Errors
/// Returns `SlotError::InvalidTimeFormat` unless the text is exactly two
/// integers separated by a single `':'`. Signed parts are allowed, so
/// `"09:-30"` is 510 and `"-1:00"` is -60.
pub fn to_minutes(text: &str) -> Result<i64> {
    let invalid = || SlotError::InvalidTimeFormat(text.to_string());

    let mut parts = text.split(':');
    let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), None) => (h, m),
        _ => return Err(invalid()),
    };

    let hours: i64 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.trim().parse().map_err(|_| invalid())?;

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(invalid)
}

/// Format minutes since midnight as zero-padded `"HH:MM"`.
///
/// Values of 1440 and above produce hours of 24 or more. Callers must not
/// pass negative minutes; the output for them is unspecified.
pub fn to_text(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
