//! # slot-engine
//!
//! Weekly availability slots for tutoring schedules.
//!
//! A tutor's availability is a set of hour-granularity time slots per
//! weekday. This crate keeps each day's set minimal -- overlapping or touching
//! slots are fused into one -- and answers the scheduling questions built on
//! top of that: where the free gaps are, and which times two schedules share.
//!
//! All operations are pure: they take slot lists or schedules and return new
//! values, so the state owner (a form, a service handler) stays in control.
//!
//! ## Modules
//!
//! - [`interval`] -- the half-open hour range `[start, end)` and its `"HH:00-HH:00"` textual form
//! - [`merge`] -- interval union: add a slot, drop a slot, normalize a list
//! - [`schedule`] -- weekdays and the week-level slot collection
//! - [`gaps`] -- free-gap complement within a window
//! - [`matching`] -- overlaps and common availability between two schedules
//! - [`error`] -- error types

pub mod error;
pub mod gaps;
pub mod interval;
pub mod matching;
pub mod merge;
pub mod schedule;

pub use error::SlotError;
pub use gaps::{first_gap, free_gaps};
pub use interval::TimeInterval;
pub use matching::{common_availability, common_intervals, find_overlaps, Overlap};
pub use merge::{add_interval, merge_intervals, remove_interval};
pub use schedule::{DaySchedule, WeekSchedule, Weekday};
