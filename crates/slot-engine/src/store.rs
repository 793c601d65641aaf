//! Store contracts and an in-memory implementation.
//!
//! The engine itself holds no state. Callers construct a store explicitly,
//! load it, and pass fresh reads into [`crate::available_slots`] on every
//! query; staleness is entirely the caller's concern.

use chrono::NaiveDate;

use crate::blocked::{BlockedDate, DayBlock};
use crate::booking::Booking;
use crate::time::SlotTime;

/// Read side of the bookings collection.
pub trait BookingStore {
    /// All confirmed bookings for the given date.
    fn bookings_for(&self, date: NaiveDate) -> Vec<Booking>;
}

/// Read side of the blocked-dates collection. Returns the global list; the
/// engine filters by date itself.
pub trait BlockedTimeStore {
    fn blocked_records(&self) -> Vec<BlockedDate>;
}

/// In-memory store backing tests and the CLI. Mirrors the JSON documents
/// the admin tooling persists: one bookings list and one blocked-dates list
/// with at most one record per date.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    bookings: Vec<Booking>,
    blocked: Vec<BlockedDate>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    pub fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Insert or replace the blocked record for the record's date.
    pub fn upsert_blocked(&mut self, record: BlockedDate) {
        match self.blocked.iter_mut().find(|r| r.date == record.date) {
            Some(existing) => *existing = record,
            None => self.blocked.push(record),
        }
    }

    /// Remove the blocked record for a date entirely. Returns whether a
    /// record existed.
    pub fn unblock_date(&mut self, date: NaiveDate) -> bool {
        let before = self.blocked.len();
        self.blocked.retain(|r| r.date != date);
        self.blocked.len() != before
    }

    /// Remove one blocked time from a date's record. When the last listed
    /// time goes away the record itself is deleted — the store never keeps
    /// an accidental empty list, which would read back as a whole-day
    /// block. Unblocking a time on a whole-day record also deletes the
    /// record, since its stored time list is empty. Returns whether a
    /// record existed.
    pub fn unblock_time(&mut self, date: NaiveDate, time: SlotTime) -> bool {
        let Some(index) = self.blocked.iter().position(|r| r.date == date) else {
            return false;
        };
        let remaining = match &mut self.blocked[index].block {
            DayBlock::WholeDay => 0,
            DayBlock::Times(times) => {
                times.retain(|&t| t != time);
                times.len()
            }
        };
        if remaining == 0 {
            self.blocked.remove(index);
        }
        true
    }
}

impl BookingStore for InMemoryStore {
    fn bookings_for(&self, date: NaiveDate) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.date == date)
            .cloned()
            .collect()
    }
}

impl BlockedTimeStore for InMemoryStore {
    fn blocked_records(&self) -> Vec<BlockedDate> {
        self.blocked.clone()
    }
}
