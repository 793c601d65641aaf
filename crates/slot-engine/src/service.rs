//! Service catalog shapes and duration-label resolution.
//!
//! The catalog stores human-readable duration labels ("3小时", "3 hrs");
//! slot computation only needs the integer hour count. Resolution is total:
//! a label with no recognizable hour figure falls back to the 3-hour
//! baseline rather than failing.

use serde::{Deserialize, Serialize};

/// Fallback when a duration label has no parseable hour figure.
pub const DEFAULT_DURATION_HOURS: u32 = 3;

/// Hour-unit tokens a duration label may use. Matched case-insensitively
/// against the text following the first integer in the label.
const HOUR_UNITS: [&str; 6] = ["小时", "hours", "hour", "hrs", "hr", "h"];

/// The one property of a service the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub duration_hours: u32,
}

impl ServiceDescriptor {
    pub fn new(duration_hours: u32) -> Self {
        ServiceDescriptor { duration_hours }
    }
}

impl Default for ServiceDescriptor {
    fn default() -> Self {
        ServiceDescriptor::new(DEFAULT_DURATION_HOURS)
    }
}

/// A catalog entry as the admin tooling stores it. Only the duration label
/// feeds slot computation; the rest is display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    #[serde(default)]
    pub name_cn: String,
    #[serde(default)]
    pub name_en: String,
    pub duration: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
}

impl Service {
    /// Resolve this entry's duration label into an engine descriptor.
    pub fn descriptor(&self) -> ServiceDescriptor {
        ServiceDescriptor::new(resolve_duration_hours(&self.duration))
    }
}

/// Extract the hour count from a duration label: the first integer that is
/// followed (after optional whitespace) by an hour-unit token. Returns the
/// 3-hour default when nothing matches — never fails.
pub fn resolve_duration_hours(label: &str) -> u32 {
    let bytes = label.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            // Skip ahead byte-wise; digits are always ASCII so this cannot
            // land mid-codepoint when a digit run begins.
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let rest = label[i..].trim_start().to_lowercase();
        if HOUR_UNITS.iter().any(|unit| rest.starts_with(unit)) {
            if let Ok(hours) = label[start..i].parse::<u32>() {
                return hours;
            }
        }
    }
    DEFAULT_DURATION_HOURS
}
