//! The weekly availability model: weekdays and their slot lists.
//!
//! A [`WeekSchedule`] is what the availability picker edits and what gets
//! persisted: an ordered list of days, each carrying a normalized slot list.
//! Days without slots are not stored at all -- removing a day's last slot
//! drops the whole entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SlotError;
use crate::interval::TimeInterval;
use crate::merge::{add_interval, remove_interval};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = SlotError;

    /// Accepts full names and 3-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, SlotError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(SlotError::ParseDay(s.to_string())),
        }
    }
}

/// One day's slots. The wire entry of a schedule:
/// `{"day": "monday", "slots": ["09:00-12:00"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub slots: Vec<TimeInterval>,
}

/// A week of availability.
///
/// Days stay ordered Monday→Sunday and every day's slot list is kept merged.
/// Deserialization re-normalizes, so a hand-edited schedule file with
/// overlapping or out-of-order slots loads into a valid week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slot, fusing it with anything it overlaps or touches on that day.
    /// A day seen for the first time is inserted at its weekday position.
    pub fn add(&mut self, day: Weekday, slot: TimeInterval) {
        match self.days.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => entry.slots = add_interval(&entry.slots, slot),
            None => {
                let pos = self
                    .days
                    .iter()
                    .position(|entry| entry.day > day)
                    .unwrap_or(self.days.len());
                self.days.insert(
                    pos,
                    DaySchedule {
                        day,
                        slots: vec![slot],
                    },
                );
            }
        }
    }

    /// Remove a slot by exact value. Removing a slot that is not stored is a
    /// no-op; removing a day's last slot drops the day entry.
    pub fn remove(&mut self, day: Weekday, slot: TimeInterval) {
        if let Some(idx) = self.days.iter().position(|entry| entry.day == day) {
            let remaining = remove_interval(&self.days[idx].slots, slot);
            if remaining.is_empty() {
                self.days.remove(idx);
            } else {
                self.days[idx].slots = remaining;
            }
        }
    }

    /// The day's slots, empty when the day is absent.
    pub fn slots_for(&self, day: Weekday) -> &[TimeInterval] {
        self.days
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.slots.as_slice())
            .unwrap_or(&[])
    }

    /// True when `hour` on `day` falls inside a stored slot.
    pub fn contains(&self, day: Weekday, hour: u8) -> bool {
        self.slots_for(day).iter().any(|slot| slot.contains_hour(hour))
    }

    /// The stored days in Monday→Sunday order.
    pub fn days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total available hours across the week.
    pub fn total_hours(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|entry| entry.slots.iter())
            .map(|slot| u32::from(slot.hours()))
            .sum()
    }
}

impl<'de> Deserialize<'de> for WeekSchedule {
    /// Deserialize by replaying every slot through [`WeekSchedule::add`],
    /// so the loaded week is normalized regardless of how the file was
    /// written.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<DaySchedule>::deserialize(deserializer)?;
        let mut week = WeekSchedule::new();
        for entry in entries {
            for slot in entry.slots {
                week.add(entry.day, slot);
            }
        }
        Ok(week)
    }
}
