//! Candidate slot generation: walk the search window, keep what fits.
//!
//! The generator is a pure function of the request and the gathered busy
//! data. No randomness and no wall-clock reads, so identical inputs always
//! produce identical output.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::busy::BusyCalendar;
use crate::constraints::WorkingHours;
use crate::error::{Result, SlotError};
use crate::interval::Interval;

pub const DEFAULT_GRANULARITY_MINUTES: i64 = 30;

fn default_granularity() -> i64 {
    DEFAULT_GRANULARITY_MINUTES
}

/// One scheduling request. Immutable; a fresh request recomputes from
/// scratch rather than resuming a previous result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Everyone whose calendar must be clear, organizer included. May be
    /// empty (organizer-only scheduling against constraints alone).
    pub attendees: Vec<String>,
    /// The half-open window to search.
    pub window: Interval,
    /// Meeting length in minutes.
    pub duration_minutes: i64,
    /// Step size when walking the window.
    #[serde(default = "default_granularity")]
    pub granularity_minutes: i64,
    pub working_hours: WorkingHours,
}

impl SlotRequest {
    /// Reject malformed requests before any iteration begins. Bad shapes
    /// are reported, never silently corrected.
    ///
    /// A duration or granularity beyond what chrono can represent as a
    /// `Duration` (or that overflows the datetime range when added to the
    /// window start) is as malformed as a non-positive one.
    pub fn validate(&self) -> Result<()> {
        let duration = Duration::try_minutes(self.duration_minutes)
            .filter(|d| *d > Duration::zero())
            .ok_or(SlotError::InvalidDuration(self.duration_minutes))?;
        Duration::try_minutes(self.granularity_minutes)
            .filter(|g| *g > Duration::zero())
            .ok_or(SlotError::InvalidGranularity(self.granularity_minutes))?;
        if self.window.start >= self.window.end {
            return Err(SlotError::InvalidWindow);
        }
        if self.window.start.checked_add_signed(duration).is_none() {
            return Err(SlotError::InvalidDuration(self.duration_minutes));
        }
        Ok(())
    }
}

/// A proposed meeting time that passed every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Generate every valid candidate slot in the request's search window.
///
/// Starting at `window.start`, steps forward by the granularity and forms a
/// candidate of the requested duration at each step. A candidate is kept
/// iff the working-hours constraints permit it and no attendee with known
/// busy data is busy during it. A candidate ending exactly at `window.end`
/// is still inside the window.
///
/// Attendees without an entry in `busy` are skipped here; the resolver is
/// responsible for reporting them as unresolved rather than assuming free.
///
/// Output is ascending by start and bounded by the window size over the
/// granularity.
///
/// # Errors
/// Fails fast with a validation error on non-positive duration or
/// granularity, or an inverted search window.
pub fn generate_slots(request: &SlotRequest, busy: &BusyCalendar) -> Result<Vec<CandidateSlot>> {
    request.validate()?;

    let duration = Duration::try_minutes(request.duration_minutes)
        .ok_or(SlotError::InvalidDuration(request.duration_minutes))?;
    let step = Duration::try_minutes(request.granularity_minutes)
        .ok_or(SlotError::InvalidGranularity(request.granularity_minutes))?;

    let mut slots = Vec::new();
    let mut cursor = request.window.start;

    // Checked arithmetic throughout: a candidate end or cursor step that
    // leaves chrono's representable range is simply past the window.
    while let Some(end) = cursor.checked_add_signed(duration) {
        if end > request.window.end {
            break;
        }
        let candidate = Interval::new(cursor, end);

        let clear_for_everyone = request
            .attendees
            .iter()
            .all(|attendee| !busy.is_busy(attendee, &candidate));

        if request.working_hours.permits(&candidate) && clear_for_everyone {
            slots.push(CandidateSlot {
                start: candidate.start,
                end: candidate.end,
            });
        }

        match cursor.checked_add_signed(step) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(slots)
}
