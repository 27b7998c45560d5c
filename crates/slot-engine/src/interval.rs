//! Half-open time intervals and set operations over them.
//!
//! Every busy period and candidate slot in the engine is an `[start, end)`
//! interval over UTC instants. Touching intervals (`a.end == b.start`) do
//! not overlap; that rule is load-bearing for back-to-back meetings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time range `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval { start, end }
    }

    /// True iff the two intervals share at least one instant.
    ///
    /// Half-open semantics: `a.start < b.end && b.start < a.end`, so an
    /// interval ending exactly where another starts does NOT overlap it.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Clip this interval to `window`, or `None` if nothing remains.
    ///
    /// Used when bounding provider busy data to the search window. A result
    /// collapsing to zero length counts as nothing remaining.
    pub fn clip(&self, window: &Interval) -> Option<Interval> {
        let start = self.start.max(window.start);
        let end = self.end.min(window.end);
        if start < end {
            Some(Interval { start, end })
        } else {
            None
        }
    }
}

/// Merge raw intervals into the minimal sorted, pairwise-disjoint cover.
///
/// Input may be unsorted and contain duplicates; zero-length and inverted
/// intervals are dropped. Overlapping or adjacent intervals are merged
/// (adjacency merges because a participant busy over `[a, b)` and `[b, c)`
/// is busy over all of `[a, c)`).
///
/// Idempotent: merging an already-merged list returns it unchanged.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.retain(|iv| iv.start < iv.end);
    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::new();
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent: extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}
