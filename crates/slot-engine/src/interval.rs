//! The hour-granularity time slot and its `"HH:00-HH:00"` textual form.
//!
//! Availability is tracked on a 24-hour grid: a slot covers whole hours only.
//! The textual form always renders `:00` minutes; when parsing, a minute
//! component is accepted but ignored, so `"09:30"` reads as hour 9.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// A half-open hour range `[start, end)` within a single day.
///
/// `start` is inclusive, `end` exclusive. Values can only be built through
/// [`TimeInterval::new`] (or parsed from text), so every `TimeInterval` in
/// circulation satisfies `start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInterval {
    start: u8,
    end: u8,
}

impl TimeInterval {
    /// The whole-day window, `00:00-24:00`.
    pub const FULL_DAY: TimeInterval = TimeInterval { start: 0, end: 24 };

    /// Build a slot from hour bounds.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidInterval`] when `start >= end` or `end`
    /// lies beyond the 24-hour grid. This is the single validation point --
    /// downstream operations never see a malformed slot.
    pub fn new(start: u8, end: u8) -> Result<Self> {
        if start >= end || end > 24 {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build from bounds already known to be valid (merge/clip internals).
    pub(crate) fn new_unchecked(start: u8, end: u8) -> Self {
        debug_assert!(start < end && end <= 24);
        Self { start, end }
    }

    /// Inclusive start hour, 0..=23.
    pub fn start(&self) -> u8 {
        self.start
    }

    /// Exclusive end hour, 1..=24.
    pub fn end(&self) -> u8 {
        self.end
    }

    /// Number of whole hours covered.
    pub fn hours(&self) -> u8 {
        self.end - self.start
    }

    /// True when the two slots share at least one hour.
    ///
    /// Touching slots (one ends exactly when the other starts) do NOT overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when the two slots overlap or sit flush against each other.
    /// This is the merge condition: touching slots fuse into one.
    pub fn touches(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// True when `hour` falls inside the slot (`start <= hour < end`).
    pub fn contains_hour(&self, hour: u8) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Push the exclusive bound forward. Never shrinks.
    pub(crate) fn extend_to(&mut self, end: u8) {
        debug_assert!(end >= self.end && end <= 24);
        self.end = end;
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

impl FromStr for TimeInterval {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        let (lo, hi) = s
            .split_once('-')
            .ok_or_else(|| SlotError::ParseInterval(s.to_string()))?;
        let start = parse_hour(lo).ok_or_else(|| SlotError::ParseInterval(s.to_string()))?;
        let end = parse_hour(hi).ok_or_else(|| SlotError::ParseInterval(s.to_string()))?;
        Self::new(start, end)
    }
}

/// Read the hour component of an `HH:MM` (or bare `HH`) bound.
/// The minute component is ignored: the grid is hour-resolution.
fn parse_hour(bound: &str) -> Option<u8> {
    let hour = match bound.trim().split_once(':') {
        Some((h, _minutes)) => h,
        None => bound.trim(),
    };
    hour.parse().ok()
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
