//! Tests for blocked-date records: predicate behavior and the wire shape.

use chrono::NaiveDate;
use slot_engine::{is_blocked, BlockedDate, DayBlock, SlotTime};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
}

fn t(s: &str) -> SlotTime {
    s.parse().unwrap()
}

// ── Predicate ───────────────────────────────────────────────────────────────

#[test]
fn date_without_record_is_open() {
    assert!(!is_blocked(t("09:00"), day(7), &[]));

    let records = vec![BlockedDate::whole_day(day(8))];
    assert!(!is_blocked(t("09:00"), day(7), &records));
}

#[test]
fn whole_day_record_blocks_every_time() {
    let records = vec![BlockedDate::whole_day(day(7))];
    for time in ["00:00", "09:00", "15:00", "23:59"] {
        assert!(is_blocked(t(time), day(7), &records), "{} should be blocked", time);
    }
}

#[test]
fn partial_record_blocks_listed_times_only() {
    let records = vec![BlockedDate::times(day(7), vec![t("09:00"), t("15:00")])];
    assert!(is_blocked(t("09:00"), day(7), &records));
    assert!(is_blocked(t("15:00"), day(7), &records));
    assert!(!is_blocked(t("12:00"), day(7), &records));
}

#[test]
fn blocking_is_exact_membership_not_a_range() {
    // A blocked 10:00 says nothing about 10:30 or 11:00.
    let records = vec![BlockedDate::times(day(7), vec![t("10:00")])];
    assert!(!is_blocked(t("10:30"), day(7), &records));
    assert!(!is_blocked(t("11:00"), day(7), &records));
}

// ── Wire shape ──────────────────────────────────────────────────────────────

#[test]
fn empty_times_array_deserializes_as_whole_day() {
    let record: BlockedDate =
        serde_json::from_str(r#"{"date":"2026-01-07","times":[]}"#).unwrap();
    assert_eq!(record.date, day(7));
    assert_eq!(record.block, DayBlock::WholeDay);
}

#[test]
fn listed_times_deserialize_as_partial_block() {
    let record: BlockedDate =
        serde_json::from_str(r#"{"date":"2026-01-07","times":["09:00","12:00"]}"#).unwrap();
    assert_eq!(record.block, DayBlock::Times(vec![t("09:00"), t("12:00")]));
}

#[test]
fn whole_day_serializes_back_to_empty_times() {
    let json = serde_json::to_string(&BlockedDate::whole_day(day(7))).unwrap();
    assert_eq!(json, r#"{"date":"2026-01-07","times":[]}"#);
}

#[test]
fn partial_block_round_trips() {
    let record = BlockedDate::times(day(7), vec![t("09:00")]);
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"date":"2026-01-07","times":["09:00"]}"#);
    let back: BlockedDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn malformed_time_in_record_is_rejected() {
    let result = serde_json::from_str::<BlockedDate>(r#"{"date":"2026-01-07","times":["9am"]}"#);
    assert!(result.is_err());
}
