//! Fan-out resolution: gather busy data concurrently, then generate slots.
//!
//! One lookup task per attendee, each with its own timeout, the whole
//! gather phase bounded by a global deadline. A single slow or broken
//! calendar source costs one warning, not the whole request; only the
//! degenerate case where no attendee resolves at all is fatal. Everything
//! after the gather phase is sequential and pure, so the final slot list
//! never depends on the order in which lookups complete.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::busy::{BusyCalendar, ParticipantBusySet};
use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::slots::{self, CandidateSlot, SlotRequest};
use crate::source::{BusySource, SourceError};

/// Timeout policy for the gather phase.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Independent timeout applied to each participant's lookup.
    pub source_timeout: Duration,
    /// Upper bound on the whole gather phase; lookups still pending when
    /// it elapses are abandoned and reported as unresolved.
    pub global_deadline: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            source_timeout: Duration::from_secs(10),
            global_deadline: Duration::from_secs(30),
        }
    }
}

/// The answer to one scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Valid candidate slots, ascending by start.
    pub slots: Vec<CandidateSlot>,
    /// Attendees whose busy data could not be retrieved. Their calendars
    /// were NOT consulted; the caller decides whether slots computed
    /// without them are acceptable.
    pub unresolved_attendees: Vec<String>,
    /// Human-readable explanations, one per unresolved attendee.
    pub warnings: Vec<String>,
}

enum LookupOutcome {
    Resolved(Vec<Interval>),
    Failed(SourceError),
    TimedOut,
}

/// Resolve a scheduling request end to end: fan out to the calendar
/// source for every attendee, normalize what came back, and generate the
/// slot list from the attendees that resolved.
///
/// Dropping the returned future aborts all in-flight lookups; a cancelled
/// request never yields a partial result.
///
/// # Errors
/// - Validation errors from the request, before any lookup is issued.
/// - [`SlotError::NoSourcesAvailable`] when the request has attendees and
///   every single lookup failed or timed out.
pub async fn resolve_availability(
    source: Arc<dyn BusySource>,
    request: &SlotRequest,
    config: &ResolverConfig,
) -> Result<Resolution> {
    request.validate()?;

    // Organizer-only requests skip the gather phase entirely.
    if request.attendees.is_empty() {
        let slots = slots::generate_slots(request, &BusyCalendar::default())?;
        return Ok(Resolution {
            slots,
            unresolved_attendees: Vec::new(),
            warnings: Vec::new(),
        });
    }

    let outcomes = gather_busy_data(source, request, config).await;

    let mut calendar = BusyCalendar::default();
    let mut unresolved_attendees = Vec::new();
    let mut warnings = Vec::new();

    // Walk attendees in request order so the report is deterministic no
    // matter how the concurrent lookups interleaved.
    let mut seen = HashSet::new();
    for attendee in &request.attendees {
        if !seen.insert(attendee.as_str()) {
            continue;
        }
        match outcomes.get(attendee.as_str()) {
            Some(LookupOutcome::Resolved(raw)) => {
                calendar.insert(ParticipantBusySet::from_raw(attendee.clone(), raw.clone()));
            }
            Some(LookupOutcome::Failed(err)) => {
                let warning = format!("busy lookup for {attendee} failed: {err}");
                log::warn!("{warning}");
                unresolved_attendees.push(attendee.clone());
                warnings.push(warning);
            }
            Some(LookupOutcome::TimedOut) => {
                let warning = format!("busy lookup for {attendee} timed out");
                log::warn!("{warning}");
                unresolved_attendees.push(attendee.clone());
                warnings.push(warning);
            }
            None => {
                let warning =
                    format!("busy lookup for {attendee} did not complete before the deadline");
                log::warn!("{warning}");
                unresolved_attendees.push(attendee.clone());
                warnings.push(warning);
            }
        }
    }

    if calendar.is_empty() {
        return Err(SlotError::NoSourcesAvailable {
            attendees: seen.len(),
        });
    }

    let slots = slots::generate_slots(request, &calendar)?;

    Ok(Resolution {
        slots,
        unresolved_attendees,
        warnings,
    })
}

/// Issue one lookup per distinct attendee and collect whatever settles
/// before the global deadline. Returns outcomes keyed by attendee;
/// attendees missing from the map were still pending at the deadline.
async fn gather_busy_data(
    source: Arc<dyn BusySource>,
    request: &SlotRequest,
    config: &ResolverConfig,
) -> HashMap<String, LookupOutcome> {
    let mut lookups = JoinSet::new();
    let mut spawned = HashSet::new();

    for attendee in &request.attendees {
        if !spawned.insert(attendee.clone()) {
            continue;
        }
        let source = Arc::clone(&source);
        let attendee = attendee.clone();
        let window = request.window;
        let per_source = config.source_timeout;

        lookups.spawn(async move {
            let outcome =
                match timeout(per_source, source.fetch_busy_intervals(&attendee, &window)).await {
                    Ok(Ok(raw)) => LookupOutcome::Resolved(raw),
                    Ok(Err(err)) => LookupOutcome::Failed(err),
                    Err(_elapsed) => LookupOutcome::TimedOut,
                };
            (attendee, outcome)
        });
    }

    let mut outcomes = HashMap::new();

    let collect_all = async {
        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((attendee, outcome)) => {
                    outcomes.insert(attendee, outcome);
                }
                Err(err) => {
                    // A panicked lookup task loses its attendee id; the
                    // caller's deadline sweep reports that attendee as
                    // unresolved.
                    log::warn!("busy lookup task failed to join: {err}");
                }
            }
        }
    };

    // In-flight tasks are aborted when `lookups` drops, both on deadline
    // expiry and on caller cancellation.
    let _ = timeout(config.global_deadline, collect_all).await;

    outcomes
}
