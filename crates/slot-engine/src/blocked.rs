//! Admin-declared blocked dates and times.
//!
//! The store keeps one record per date with a list of blocked start times;
//! an empty list is the sentinel for "the whole date is closed". Internally
//! that sentinel becomes an explicit [`DayBlock`] variant, but the wire and
//! store shape is preserved exactly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::SlotTime;

/// How a date is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayBlock {
    /// The entire date is closed to booking.
    WholeDay,
    /// Only the listed start times are blocked; everything else stays open.
    Times(Vec<SlotTime>),
}

/// A blocked-date record. At most one exists per date (upsert semantics at
/// the store boundary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlockedDateWire", into = "BlockedDateWire")]
pub struct BlockedDate {
    pub date: NaiveDate,
    pub block: DayBlock,
}

impl BlockedDate {
    pub fn whole_day(date: NaiveDate) -> Self {
        BlockedDate {
            date,
            block: DayBlock::WholeDay,
        }
    }

    pub fn times(date: NaiveDate, times: Vec<SlotTime>) -> Self {
        BlockedDate {
            date,
            block: DayBlock::Times(times),
        }
    }

    /// Whether this record blocks the given start time. Exact membership
    /// only: a blocked `10:00` blocks a slot offered as `10:00`, never a
    /// range around it.
    pub fn blocks(&self, time: SlotTime) -> bool {
        match &self.block {
            DayBlock::WholeDay => true,
            DayBlock::Times(times) => times.contains(&time),
        }
    }
}

/// Store/wire shape: `{"date": "YYYY-MM-DD", "times": ["HH:MM", ...]}` with
/// an empty `times` array meaning the whole day.
#[derive(Serialize, Deserialize)]
struct BlockedDateWire {
    date: NaiveDate,
    times: Vec<SlotTime>,
}

impl From<BlockedDateWire> for BlockedDate {
    fn from(wire: BlockedDateWire) -> Self {
        if wire.times.is_empty() {
            BlockedDate::whole_day(wire.date)
        } else {
            BlockedDate::times(wire.date, wire.times)
        }
    }
}

impl From<BlockedDate> for BlockedDateWire {
    fn from(record: BlockedDate) -> Self {
        let times = match record.block {
            DayBlock::WholeDay => Vec::new(),
            DayBlock::Times(times) => times,
        };
        BlockedDateWire {
            date: record.date,
            times,
        }
    }
}

/// Whether `time` is blocked on `date`. A date with no record is fully open.
pub fn is_blocked(time: SlotTime, date: NaiveDate, records: &[BlockedDate]) -> bool {
    records
        .iter()
        .find(|record| record.date == date)
        .map(|record| record.blocks(time))
        .unwrap_or(false)
}
