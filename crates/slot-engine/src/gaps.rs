//! Free-gap computation -- the unavailable complement of a day's slots.
//!
//! Normalizes the slot list, then walks a cursor across the window emitting
//! the stretches no slot covers. The picker renders these as the greyed-out
//! hours; schedulers use [`first_gap`] to find room for a new session.

use crate::interval::TimeInterval;
use crate::merge::merge_intervals;

/// The gaps left open by `slots` within `window`.
///
/// Slots outside the window are ignored; slots straddling its edge are
/// clipped. Returns a sorted, disjoint list. With no slots in range the whole
/// window comes back as a single gap.
pub fn free_gaps(slots: &[TimeInterval], window: TimeInterval) -> Vec<TimeInterval> {
    let merged = merge_intervals(slots);

    let mut gaps = Vec::new();
    let mut cursor = window.start();

    for slot in &merged {
        // Entirely outside the window -- skip.
        if slot.end() <= window.start() || slot.start() >= window.end() {
            continue;
        }
        let covered_from = slot.start().max(window.start());
        if cursor < covered_from {
            gaps.push(TimeInterval::new_unchecked(cursor, covered_from));
        }
        cursor = cursor.max(slot.end().min(window.end()));
    }

    // Trailing gap after the last covered stretch.
    if cursor < window.end() {
        gaps.push(TimeInterval::new_unchecked(cursor, window.end()));
    }

    gaps
}

/// The first gap of at least `min_hours` within the window, if any.
pub fn first_gap(
    slots: &[TimeInterval],
    window: TimeInterval,
    min_hours: u8,
) -> Option<TimeInterval> {
    free_gaps(slots, window)
        .into_iter()
        .find(|gap| gap.hours() >= min_hours)
}
