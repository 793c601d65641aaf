//! The core availability computation.
//!
//! Given a date, a service duration, the day's bookings, and the blocked
//! records, produce the ascending, deduplicated list of offerable start
//! times. The computation is pure and deterministic: identical inputs yield
//! identical, identically ordered output.
//!
//! Rules applied, in addition to booking conflicts and admin blocks:
//!
//! - Every slot must finish by the date's closing hour.
//! - 5-hour services are never offered at or after 18:00 on extended days.
//! - A slot starting before 18:00 must end by 19:00 even on extended days;
//!   the 22:00 close only covers slots that begin inside the evening window.
//! - A slot strictly after a booking's end must leave at least a full
//!   service duration of gap. The 18:00 Tuesday/Thursday anchor slot is
//!   exempt from this spacing check.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::blocked::{is_blocked, BlockedDate};
use crate::booking::{is_booked, Booking};
use crate::hours::{
    closing_hour, fits_before_closing, is_extended_day, is_late_evening_start,
    EVENING_START_HOUR, LONG_SERVICE_HOURS, STANDARD_CLOSING_HOUR,
};
use crate::service::ServiceDescriptor;
use crate::slots::default_slots;
use crate::time::SlotTime;

/// Compute the bookable start times for `date` and `service`.
///
/// `bookings` must be the confirmed bookings for this date (the store's
/// per-date read); `blocked` is the full blocked-record list, filtered by
/// date here.
pub fn available_slots(
    date: NaiveDate,
    service: ServiceDescriptor,
    bookings: &[Booking],
    blocked: &[BlockedDate],
) -> Vec<SlotTime> {
    // Whole-day sentinel. Probing midnight hits the empty-times record; it
    // also means an explicitly blocked "00:00" blanks the day, which is the
    // stored behavior this engine preserves.
    if is_blocked(SlotTime::MIDNIGHT, date, blocked) {
        return Vec::new();
    }

    let duration = service.duration_hours;
    let closing = closing_hour(date);
    let base = default_slots(date, duration);

    // No bookings: the defaults, minus anything that runs past closing or
    // is individually blocked. `base` is already ascending.
    if bookings.is_empty() {
        return base
            .into_iter()
            .filter(|&slot| fits_before_closing(slot, duration, closing))
            .filter(|&slot| !is_blocked(slot, date, blocked))
            .collect();
    }

    let mut candidates: BTreeSet<SlotTime> = BTreeSet::new();

    // Default slots that survive every per-slot check.
    for &slot in &base {
        if fits_before_closing(slot, duration, closing)
            && !is_booked(slot, duration, bookings)
            && !is_blocked(slot, date, blocked)
        {
            candidates.insert(slot);
        }
    }

    for booking in bookings {
        // Default slots that would finish no later than this booking
        // starts. Recovers earlier defaults that only other bookings could
        // have pushed out.
        for &slot in &base {
            if slot.hour().saturating_add(duration) <= booking.start_time.hour()
                && fits_before_closing(slot, duration, closing)
                && !is_booked(slot, duration, bookings)
                && !is_blocked(slot, date, blocked)
            {
                candidates.insert(slot);
            }
        }

        // The slot at the moment this booking frees up.
        let end_hour = booking.end_hour();
        if end_hour < 24 {
            let follow_on = SlotTime::from_parts(end_hour, 0);
            if fits_before_closing(follow_on, duration, closing)
                && !is_booked(follow_on, duration, bookings)
                && !is_blocked(follow_on, date, blocked)
                && !(is_late_evening_start(follow_on, date) && duration == LONG_SERVICE_HOURS)
            {
                candidates.insert(follow_on);
            }
        }
    }

    let booking_ends: Vec<u32> = bookings.iter().map(Booking::end_hour).collect();
    let extended = is_extended_day(date);

    // Final filter over the unioned candidates. BTreeSet iteration gives the
    // ascending, deduplicated order the callers rely on.
    candidates
        .into_iter()
        .filter(|&slot| !is_blocked(slot, date, blocked))
        .filter(|&slot| !is_booked(slot, duration, bookings))
        .filter(|&slot| !(is_late_evening_start(slot, date) && duration == LONG_SERVICE_HOURS))
        .filter(|&slot| fits_before_closing(slot, duration, closing))
        .filter(|&slot| {
            // Slots before the evening window must wrap up by the standard
            // close, even when the date runs extended hours.
            slot.hour() >= EVENING_START_HOUR
                || slot.hour().saturating_add(duration) <= STANDARD_CLOSING_HOUR
        })
        .filter(|&slot| {
            // Inter-booking spacing: starting less than a full duration
            // after some booking's end is not offered. The 18:00 evening
            // anchor on extended days is always allowed through.
            if extended && slot.hour() == EVENING_START_HOUR {
                return true;
            }
            booking_ends
                .iter()
                .all(|&end| slot.hour() <= end || slot.hour() - end >= duration)
        })
        .collect()
}
