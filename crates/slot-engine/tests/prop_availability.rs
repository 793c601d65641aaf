//! Property-based tests for the availability computation using proptest.
//!
//! These verify invariants that should hold for *any* date, service
//! duration, booking set, and blocked-record set, not just the worked
//! examples in `availability_tests.rs`.

use chrono::NaiveDate;
use proptest::prelude::*;
use slot_engine::hours::closing_hour;
use slot_engine::{
    available_slots, is_blocked, overlaps, BlockedDate, Booking, ServiceDescriptor, SlotTime,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Any local date in 2025-2027. Day capped at 28 to avoid invalid combos.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2025i32..=2027, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_duration() -> impl Strategy<Value = u32> {
    1u32..=6
}

/// A booking on the given grid: starts 9..=18, runs 1..=5 hours.
fn arb_booking(date: NaiveDate) -> impl Strategy<Value = Booking> {
    (9u32..=18, 1u32..=5).prop_map(move |(hour, hours)| {
        Booking::new(date, SlotTime::new(hour, 0).unwrap(), hours)
    })
}

fn arb_bookings(date: NaiveDate) -> impl Strategy<Value = Vec<Booking>> {
    prop::collection::vec(arb_booking(date), 0..4)
}

/// A blocked record for the date: whole-day, or 1-3 whole-hour times.
fn arb_blocked(date: NaiveDate) -> impl Strategy<Value = Vec<BlockedDate>> {
    let whole_day = Just(vec![BlockedDate::whole_day(date)]);
    let partial = prop::collection::vec(9u32..=18, 1..=3).prop_map(move |hours| {
        let times = hours
            .into_iter()
            .map(|h| SlotTime::new(h, 0).unwrap())
            .collect();
        vec![BlockedDate::times(date, times)]
    });
    prop_oneof![
        Just(Vec::new()),
        whole_day,
        partial,
    ]
}

/// A full scenario: date plus matching bookings and blocks.
fn arb_scenario() -> impl Strategy<Value = (NaiveDate, u32, Vec<Booking>, Vec<BlockedDate>)> {
    (arb_date(), arb_duration()).prop_flat_map(|(date, duration)| {
        (
            Just(date),
            Just(duration),
            arb_bookings(date),
            arb_blocked(date),
        )
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Output is strictly ascending with no duplicates
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_is_strictly_ascending((date, duration, bookings, blocked) in arb_scenario()) {
        let slots = available_slots(date, ServiceDescriptor::new(duration), &bookings, &blocked);
        for pair in slots.windows(2) {
            prop_assert!(
                pair[0] < pair[1],
                "not strictly ascending: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every slot finishes by the date's closing hour
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_slot_fits_before_closing((date, duration, bookings, blocked) in arb_scenario()) {
        let slots = available_slots(date, ServiceDescriptor::new(duration), &bookings, &blocked);
        let closing = closing_hour(date);
        for slot in &slots {
            prop_assert!(
                slot.hour() + duration <= closing,
                "{} + {}h runs past the {}:00 close",
                slot,
                duration,
                closing
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No offered slot overlaps a booking
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_slot_overlaps_a_booking((date, duration, bookings, blocked) in arb_scenario()) {
        let slots = available_slots(date, ServiceDescriptor::new(duration), &bookings, &blocked);
        for slot in &slots {
            for booking in &bookings {
                prop_assert!(
                    !overlaps(*slot, duration, booking),
                    "slot {} overlaps booking at {}",
                    slot,
                    booking.start_time
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: No offered slot is blocked
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_slot_is_blocked((date, duration, bookings, blocked) in arb_scenario()) {
        let slots = available_slots(date, ServiceDescriptor::new(duration), &bookings, &blocked);
        for slot in &slots {
            prop_assert!(!is_blocked(*slot, date, &blocked), "blocked slot {} offered", slot);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: A whole-day block empties the result, whatever else holds
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn whole_day_block_always_empties(
        (date, duration, bookings, _) in arb_scenario()
    ) {
        let blocked = vec![BlockedDate::whole_day(date)];
        let slots = available_slots(date, ServiceDescriptor::new(duration), &bookings, &blocked);
        prop_assert!(slots.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property 6: Determinism — identical inputs, identical ordered output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn computation_is_deterministic((date, duration, bookings, blocked) in arb_scenario()) {
        let descriptor = ServiceDescriptor::new(duration);
        let first = available_slots(date, descriptor, &bookings, &blocked);
        let second = available_slots(date, descriptor, &bookings, &blocked);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 7: 5-hour services never start in the extended-evening window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn five_hour_service_never_starts_in_the_evening(
        date in arb_date(),
        bookings in prop::collection::vec((9u32..=18, 1u32..=5), 0..4),
    ) {
        let bookings: Vec<Booking> = bookings
            .into_iter()
            .map(|(hour, hours)| Booking::new(date, SlotTime::new(hour, 0).unwrap(), hours))
            .collect();
        let slots = available_slots(date, ServiceDescriptor::new(5), &bookings, &[]);
        for slot in &slots {
            prop_assert!(slot.hour() < 18, "5-hour service offered at {}", slot);
        }
    }
}
