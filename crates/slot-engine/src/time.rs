//! The `HH:MM` time-of-day value type and local-date helpers.
//!
//! All date handling is local-calendar only: a date is a plain
//! year/month/day value and its canonical form is the `YYYY-MM-DD` string
//! built from those components. Nothing here converts through UTC, so a
//! late-evening booking can never drift onto the neighboring day.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// A start time on the booking grid, 24-hour local time.
///
/// Ordering is `(hour, minute)`, which for same-day values is identical to
/// lexicographic order on the `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime {
    hour: u32,
    minute: u32,
}

impl SlotTime {
    /// `00:00` — used as the probe time for the whole-day block sentinel.
    pub const MIDNIGHT: SlotTime = SlotTime { hour: 0, minute: 0 };

    /// Construct from hour/minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(SlotTime { hour, minute })
    }

    /// Crate-internal constructor for the slot generators, which only ever
    /// produce in-range values.
    pub(crate) const fn from_parts(hour: u32, minute: u32) -> Self {
        SlotTime { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotTime {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = s.split_once(':').and_then(|(h, m)| {
            if h.len() != 2 || m.len() != 2 {
                return None;
            }
            let hour: u32 = h.parse().ok()?;
            let minute: u32 = m.parse().ok()?;
            Some((hour, minute))
        });
        match parsed {
            Some((hour, minute)) => {
                SlotTime::new(hour, minute).map_err(|_| SlotError::InvalidTime(s.to_string()))
            }
            None => Err(SlotError::InvalidTime(s.to_string())),
        }
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Canonical `YYYY-MM-DD` key for a local calendar date. This is the string
/// the stores key blocked records and bookings by.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a canonical `YYYY-MM-DD` string into a local date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}
