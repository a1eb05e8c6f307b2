//! Find the times two schedules share.
//!
//! Pairwise comparison between two slot lists. Slots that merely touch
//! (one ends exactly when the other starts) share no hour and do not match.

use crate::interval::TimeInterval;
use crate::merge::merge_intervals;
use crate::schedule::{WeekSchedule, Weekday};

/// A detected overlap between one slot from each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub a: TimeInterval,
    pub b: TimeInterval,
    /// Whole hours the two slots share.
    pub hours: u8,
}

/// All pairwise overlaps between two slot lists.
///
/// Two slots overlap when `a.start < b.end && b.start < a.end`. The shared
/// stretch is `[max(starts), min(ends))`.
pub fn find_overlaps(a: &[TimeInterval], b: &[TimeInterval]) -> Vec<Overlap> {
    let mut overlaps = Vec::new();

    for x in a {
        for y in b {
            if x.overlaps(y) {
                let shared_start = x.start().max(y.start());
                let shared_end = x.end().min(y.end());
                overlaps.push(Overlap {
                    a: *x,
                    b: *y,
                    hours: shared_end - shared_start,
                });
            }
        }
    }

    overlaps
}

/// The intersection of two slot lists, as a normalized slot list.
///
/// Each pairwise overlap is clipped to its shared stretch, then the pieces
/// are merged so the result carries the usual sorted/disjoint shape.
pub fn common_intervals(a: &[TimeInterval], b: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut shared = Vec::new();

    for x in a {
        for y in b {
            if x.overlaps(y) {
                shared.push(TimeInterval::new_unchecked(
                    x.start().max(y.start()),
                    x.end().min(y.end()),
                ));
            }
        }
    }

    merge_intervals(&shared)
}

/// Week-level intersection: the times both schedules are available.
///
/// Days where the two sides share no slot are absent from the result, the
/// same way an empty day is never stored in a [`WeekSchedule`].
pub fn common_availability(a: &WeekSchedule, b: &WeekSchedule) -> WeekSchedule {
    let mut common = WeekSchedule::new();

    for day in Weekday::ALL {
        for slot in common_intervals(a.slots_for(day), b.slots_for(day)) {
            common.add(day, slot);
        }
    }

    common
}
