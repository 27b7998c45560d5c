//! Per-participant busy sets and the per-request busy aggregate.
//!
//! Raw provider data arrives unsorted, overlapping, and duplicate-laden.
//! Each participant's intervals are normalized independently on ingestion,
//! so every downstream overlap query runs against a sorted, pairwise
//! disjoint list. The aggregate distinguishes a participant with an empty
//! set (known to be fully free) from one that is absent entirely (unknown
//! availability, which must never be silently treated as free).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::interval::{self, Interval};

/// One participant's normalized busy time for a single scheduling request.
///
/// Invariant: `intervals` is sorted ascending by start and pairwise
/// non-overlapping. Built once from raw provider data, discarded when the
/// request completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBusySet {
    pub participant_id: String,
    pub intervals: Vec<Interval>,
}

impl ParticipantBusySet {
    /// Normalize raw (possibly overlapping, unsorted) intervals into a
    /// busy set. No reported busy data means the participant is fully free.
    pub fn from_raw(participant_id: impl Into<String>, raw: Vec<Interval>) -> Self {
        ParticipantBusySet {
            participant_id: participant_id.into(),
            intervals: interval::merge(raw),
        }
    }

    /// True iff `candidate` overlaps any busy interval, under half-open
    /// semantics: a meeting starting exactly when a busy period ends is
    /// not blocked by it.
    pub fn is_busy(&self, candidate: &Interval) -> bool {
        self.intervals.iter().any(|iv| iv.overlaps(candidate))
    }
}

/// All busy data gathered for one scheduling request, keyed by participant.
#[derive(Debug, Clone, Default)]
pub struct BusyCalendar {
    sets: HashMap<String, ParticipantBusySet>,
}

impl BusyCalendar {
    /// Build the aggregate from raw per-participant interval lists,
    /// normalizing each participant independently.
    pub fn from_raw(raw: HashMap<String, Vec<Interval>>) -> Self {
        let sets = raw
            .into_iter()
            .map(|(id, intervals)| {
                let set = ParticipantBusySet::from_raw(id.clone(), intervals);
                (id, set)
            })
            .collect();
        BusyCalendar { sets }
    }

    /// The busy set for a participant, or `None` if no data was ever
    /// ingested for them. Callers must treat `None` as unknown
    /// availability, not as free.
    pub fn get(&self, participant_id: &str) -> Option<&ParticipantBusySet> {
        self.sets.get(participant_id)
    }

    pub fn insert(&mut self, set: ParticipantBusySet) {
        self.sets.insert(set.participant_id.clone(), set);
    }

    pub fn contains(&self, participant_id: &str) -> bool {
        self.sets.contains_key(participant_id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// True iff the participant is known and `candidate` overlaps their
    /// busy time. Unknown participants report not-busy here; the resolver
    /// excludes them from slot checks and surfaces a warning instead.
    pub fn is_busy(&self, participant_id: &str, candidate: &Interval) -> bool {
        self.sets
            .get(participant_id)
            .is_some_and(|set| set.is_busy(candidate))
    }

    /// Union of every participant's busy time, clipped to `window`.
    ///
    /// This is the combined-schedule view: one sorted, disjoint list of
    /// periods during which at least one participant is unavailable.
    pub fn merged_busy(&self, window: &Interval) -> Vec<Interval> {
        let clipped: Vec<Interval> = self
            .sets
            .values()
            .flat_map(|set| set.intervals.iter())
            .filter_map(|iv| iv.clip(window))
            .collect();
        interval::merge(clipped)
    }
}
