//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("invalid meeting duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("invalid slot granularity: {0} minutes")]
    InvalidGranularity(i64),

    #[error("search window start must precede its end")]
    InvalidWindow,

    #[error("busy data could not be retrieved for any of the {attendees} attendees")]
    NoSourcesAvailable { attendees: usize },
}

pub type Result<T> = std::result::Result<T, SlotError>;
