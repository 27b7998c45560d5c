//! # slot-engine
//!
//! Availability resolution for meeting scheduling: merge per-participant
//! busy time from unreliable calendar sources, apply working-hours and
//! duration constraints, and emit every mutually free candidate slot in a
//! search window.
//!
//! The computation is a pure function of the request and the gathered busy
//! data. Instants are UTC throughout; wall-clock constraints are evaluated
//! in one explicitly configured time zone, never the process-local one.
//!
//! ## Modules
//!
//! - [`interval`] — half-open time ranges, overlap test, disjoint-cover merge
//! - [`busy`] — per-participant normalized busy sets and the request aggregate
//! - [`constraints`] — working-hours windows and weekday rules
//! - [`slots`] — request validation and candidate slot generation
//! - [`source`] — the async calendar-source capability providers implement
//! - [`resolver`] — concurrent fan-out with timeout and failure isolation
//! - [`error`] — error types

pub mod busy;
pub mod constraints;
pub mod error;
pub mod interval;
pub mod resolver;
pub mod slots;
pub mod source;

pub use busy::{BusyCalendar, ParticipantBusySet};
pub use constraints::WorkingHours;
pub use error::SlotError;
pub use interval::{merge, Interval};
pub use resolver::{resolve_availability, Resolution, ResolverConfig};
pub use slots::{generate_slots, CandidateSlot, SlotRequest};
pub use source::{BusySource, SourceError, StaticBusySource};
