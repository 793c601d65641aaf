//! # slot-engine
//!
//! Time-slot availability rules for a nail-salon booking system.
//!
//! Given a calendar date, a service duration, the day's confirmed bookings,
//! and the admin's blocked-date records, the engine computes the sorted list
//! of start times that may be offered to a customer. It is pure and
//! stateless: no I/O, no caching, no clock reads — callers fetch fresh store
//! data and query it on every date/service change.
//!
//! ## Modules
//!
//! - [`availability`] — the core slot computation
//! - [`slots`] — curated default slots and the admin grid
//! - [`booking`] — booking records and overlap detection
//! - [`blocked`] — blocked-date records and the whole-day sentinel
//! - [`hours`] — business-hours rules (closing times, evening window)
//! - [`service`] — service catalog shapes and duration-label resolution
//! - [`store`] — store contracts and an in-memory implementation
//! - [`time`] — the `HH:MM` time-of-day value type
//! - [`error`] — error types

pub mod availability;
pub mod blocked;
pub mod booking;
pub mod error;
pub mod hours;
pub mod service;
pub mod slots;
pub mod store;
pub mod time;

pub use availability::available_slots;
pub use blocked::{is_blocked, BlockedDate, DayBlock};
pub use booking::{is_booked, overlaps, Booking};
pub use error::SlotError;
pub use service::{resolve_duration_hours, Service, ServiceDescriptor};
pub use slots::{default_slots, slot_grid, GridOptions};
pub use store::{BlockedTimeStore, BookingStore, InMemoryStore};
pub use time::SlotTime;
