//! Business-hours rules.
//!
//! The salon closes at 19:00, except Tuesday and Thursday which run an
//! extended evening until 22:00. The extended window only applies to slots
//! starting at or after 18:00; opening is 9:00 (the earliest default slot).

use chrono::{Datelike, NaiveDate, Weekday};

use crate::time::SlotTime;

/// Earliest offered start hour.
pub const OPENING_HOUR: u32 = 9;

/// Closing hour on regular days.
pub const STANDARD_CLOSING_HOUR: u32 = 19;

/// Closing hour on extended evenings (Tuesday/Thursday).
pub const EXTENDED_CLOSING_HOUR: u32 = 22;

/// First hour of the extended-evening window.
pub const EVENING_START_HOUR: u32 = 18;

/// Service length (hours) that is never offered in the evening window.
pub const LONG_SERVICE_HOURS: u32 = 5;

/// Whether the date runs extended evening hours (Tuesday or Thursday).
pub fn is_extended_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Tue | Weekday::Thu)
}

/// The hour by which every service must finish on this date.
pub fn closing_hour(date: NaiveDate) -> u32 {
    if is_extended_day(date) {
        EXTENDED_CLOSING_HOUR
    } else {
        STANDARD_CLOSING_HOUR
    }
}

/// Whether a service starting at `start` wraps up by `closing`. No partial
/// or overflow appointments: start hour plus duration must not pass closing.
/// The sum saturates, so an absurd duration simply never fits.
pub fn fits_before_closing(start: SlotTime, duration_hours: u32, closing: u32) -> bool {
    start.hour().saturating_add(duration_hours) <= closing
}

/// Whether `start` falls inside the extended-evening window: Tuesday or
/// Thursday, at or after 18:00.
pub fn is_late_evening_start(start: SlotTime, date: NaiveDate) -> bool {
    is_extended_day(date) && start.hour() >= EVENING_START_HOUR
}
