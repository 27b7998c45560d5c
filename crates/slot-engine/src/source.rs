//! The calendar-source capability the engine consumes.
//!
//! One trait stands in for every concrete provider (Google-, Outlook-, or
//! otherwise-backed). Adding a provider means implementing the trait, never
//! branching inside the engine. Returned intervals may be unsorted,
//! overlapping, or duplicated; normalization happens on ingestion.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::interval::Interval;

/// A failure to retrieve one participant's busy data. Contained by the
/// resolver and converted into a warning; never fatal on its own.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no calendar known for participant {0}")]
    UnknownParticipant(String),

    #[error("calendar provider error: {0}")]
    Provider(String),
}

/// Per-participant busy-interval lookup against some calendar backend.
#[async_trait]
pub trait BusySource: Send + Sync {
    /// Fetch raw busy intervals for one participant, bounded to `window`.
    async fn fetch_busy_intervals(
        &self,
        participant_id: &str,
        window: &Interval,
    ) -> Result<Vec<Interval>, SourceError>;
}

/// An in-memory source backed by a fixed map of busy intervals.
///
/// Serves file-fed CLI requests and deterministic tests. Participants
/// absent from the map report [`SourceError::UnknownParticipant`], so the
/// unknown-availability path behaves exactly as it would against a real
/// provider that has no calendar for an address.
#[derive(Debug, Clone, Default)]
pub struct StaticBusySource {
    calendars: HashMap<String, Vec<Interval>>,
}

impl StaticBusySource {
    pub fn new(calendars: HashMap<String, Vec<Interval>>) -> Self {
        StaticBusySource { calendars }
    }
}

#[async_trait]
impl BusySource for StaticBusySource {
    async fn fetch_busy_intervals(
        &self,
        participant_id: &str,
        window: &Interval,
    ) -> Result<Vec<Interval>, SourceError> {
        let raw = self
            .calendars
            .get(participant_id)
            .ok_or_else(|| SourceError::UnknownParticipant(participant_id.to_string()))?;

        // Bound to the window here; real providers do the same server-side.
        Ok(raw.iter().filter_map(|iv| iv.clip(window)).collect())
    }
}
