//! Booking records and overlap detection.
//!
//! Two appointments conflict when their half-open hour intervals intersect.
//! A candidate that starts exactly when a booking ends is not a conflict:
//! back-to-back scheduling is allowed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::ServiceDescriptor;
use crate::time::SlotTime;

/// A confirmed appointment. Immutable from the engine's point of view; the
/// engine only reads the bookings for the date being queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub date: NaiveDate,
    /// The frontend historically sent this under several names.
    #[serde(alias = "selectedTime", alias = "time")]
    pub start_time: SlotTime,
    pub service: ServiceDescriptor,
}

impl Booking {
    pub fn new(date: NaiveDate, start_time: SlotTime, duration_hours: u32) -> Self {
        Booking {
            date,
            start_time,
            service: ServiceDescriptor::new(duration_hours),
        }
    }

    /// The hour this booking frees up. Saturates rather than overflowing on
    /// an absurd stored duration.
    pub fn end_hour(&self) -> u32 {
        self.start_time.hour().saturating_add(self.service.duration_hours)
    }
}

/// Half-open interval intersection between a candidate slot and a booking:
/// `candidate.start < booking.end && candidate.end > booking.start`.
pub fn overlaps(candidate: SlotTime, duration_hours: u32, booking: &Booking) -> bool {
    let candidate_end = candidate.hour().saturating_add(duration_hours);
    candidate.hour() < booking.end_hour() && candidate_end > booking.start_time.hour()
}

/// Whether the candidate slot conflicts with any booking on the date.
pub fn is_booked(candidate: SlotTime, duration_hours: u32, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|booking| overlaps(candidate, duration_hours, booking))
}
