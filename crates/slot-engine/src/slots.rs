//! Curated default slots and the admin grid.
//!
//! Customers are offered a small set of "nice" start times, not every
//! possible half hour. The admin view does see the full grid, generated on
//! a fixed minute interval up to the date's closing hour.

use chrono::NaiveDate;

use crate::hours::{closing_hour, is_extended_day, EVENING_START_HOUR, LONG_SERVICE_HOURS, OPENING_HOUR};
use crate::time::SlotTime;

/// Default start hours for the 3-hour baseline.
const BASELINE_HOURS: [u32; 3] = [9, 12, 15];

/// Default start hours for 5-hour services.
const LONG_SERVICE_START_HOURS: [u32; 2] = [9, 14];

/// The curated default slots for a date and service duration, ascending.
///
/// - 5-hour services: 09:00 and 14:00.
/// - Everything else (the 3-hour baseline): 09:00, 12:00, 15:00, plus the
///   18:00 evening anchor on Tuesday/Thursday.
pub fn default_slots(date: NaiveDate, duration_hours: u32) -> Vec<SlotTime> {
    if duration_hours == LONG_SERVICE_HOURS {
        return LONG_SERVICE_START_HOURS
            .iter()
            .map(|&hour| SlotTime::from_parts(hour, 0))
            .collect();
    }

    let mut slots: Vec<SlotTime> = BASELINE_HOURS
        .iter()
        .map(|&hour| SlotTime::from_parts(hour, 0))
        .collect();
    if is_extended_day(date) {
        slots.push(SlotTime::from_parts(EVENING_START_HOUR, 0));
    }
    slots
}

/// Options for [`slot_grid`].
#[derive(Debug, Clone, Copy)]
pub struct GridOptions {
    /// First hour on the grid.
    pub start_hour: u32,
    /// Last (exclusive) hour; `None` uses the date's closing hour.
    pub end_hour: Option<u32>,
    /// Spacing between grid times, in minutes.
    pub interval_minutes: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            start_hour: OPENING_HOUR,
            end_hour: None,
            interval_minutes: 30,
        }
    }
}

/// Every possible start time for the admin view: `start_hour` up to (but
/// not including) the end hour, on the configured interval.
pub fn slot_grid(date: NaiveDate, options: &GridOptions) -> Vec<SlotTime> {
    let end_hour = options.end_hour.unwrap_or_else(|| closing_hour(date));
    let interval = options.interval_minutes.clamp(1, 60);

    let mut grid = Vec::new();
    for hour in options.start_hour..end_hour.min(24) {
        let mut minute = 0;
        while minute < 60 {
            grid.push(SlotTime::from_parts(hour, minute));
            minute += interval;
        }
    }
    grid
}
