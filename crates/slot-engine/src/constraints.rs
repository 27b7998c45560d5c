//! Working-hours constraints: allowed weekdays and daily time bounds.
//!
//! All wall-clock reasoning happens in one explicitly configured IANA time
//! zone carried by the constraint itself. The evaluator never consults the
//! process-local zone, so a request resolves identically on every machine.

use chrono::{NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// The temporal constraints for one scheduling request. Immutable once the
/// request begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Earliest local time-of-day a slot may start.
    pub start_of_day: NaiveTime,
    /// Latest local time-of-day a slot may end (inclusive).
    pub end_of_day: NaiveTime,
    /// Weekdays on which slots may start.
    pub weekdays: Vec<Weekday>,
    /// The zone in which `start_of_day`, `end_of_day`, and `weekdays`
    /// are interpreted.
    pub timezone: Tz,
}

impl WorkingHours {
    /// The standard Monday-through-Friday workweek.
    pub fn weekdays_mon_fri() -> Vec<Weekday> {
        vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]
    }

    /// Decide whether `candidate` is permissible on purely temporal
    /// grounds, ignoring any busy data.
    ///
    /// Accepted iff, in the configured zone:
    /// - the start's weekday is allowed,
    /// - the start is at or after `start_of_day`,
    /// - the end is at or before `end_of_day` (ending exactly at close of
    ///   business is a valid meeting end, so this bound is closed, unlike
    ///   the half-open busy-overlap rule),
    /// - start and end fall on the same local calendar day. A slot that
    ///   would cross midnight is rejected outright, not truncated. The
    ///   same-day check also catches a slot ending at exactly 00:00, whose
    ///   time-of-day alone would compare as `00:00 <= end_of_day`.
    pub fn permits(&self, candidate: &Interval) -> bool {
        use chrono::Datelike;

        let start = candidate.start.with_timezone(&self.timezone);
        let end = candidate.end.with_timezone(&self.timezone);

        self.weekdays.contains(&start.weekday())
            && start.date_naive() == end.date_naive()
            && start.time() >= self.start_of_day
            && end.time() <= self.end_of_day
    }
}
