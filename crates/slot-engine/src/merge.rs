//! Interval union for per-day availability.
//!
//! Keeps each day's stored slot list minimal: sorted by start, pairwise
//! disjoint, with overlapping or touching slots fused into one.

use crate::interval::TimeInterval;

/// Merge overlapping or adjacent slots into a minimal disjoint set.
///
/// Sorts by `(start, end)` then sweeps left to right, extending the current
/// slot whenever the next one starts at or before its end. The result is
/// sorted, pairwise disjoint, and non-adjacent; re-running it is a no-op.
pub fn merge_intervals(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|slot| (slot.start(), slot.end()));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for slot in sorted {
        if let Some(last) = merged.last_mut() {
            if slot.start() <= last.end() {
                // Overlapping or adjacent -- extend the current slot.
                if slot.end() > last.end() {
                    last.extend_to(slot.end());
                }
                continue;
            }
        }
        merged.push(slot);
    }

    merged
}

/// Add a slot to a day's list, fusing it with anything it overlaps or touches.
///
/// Pure: returns a new normalized list, `existing` is untouched. Adding a slot
/// already covered by the list leaves its coverage unchanged.
pub fn add_interval(existing: &[TimeInterval], new: TimeInterval) -> Vec<TimeInterval> {
    let mut all = existing.to_vec();
    all.push(new);
    merge_intervals(&all)
}

/// Remove a slot by exact value.
///
/// Only whole slots are dropped -- there is no partial subtraction, matching
/// how the picker deletes the entries it previously displayed. A target not
/// present in the list is a no-op.
pub fn remove_interval(existing: &[TimeInterval], target: TimeInterval) -> Vec<TimeInterval> {
    existing
        .iter()
        .copied()
        .filter(|slot| *slot != target)
        .collect()
}
