//! Error types for repeatcal.
//!
//! The expansion engine itself never fails; these cover the edges around it
//! (configuration, the event store, template files).

use thiserror::Error;

/// Errors that can occur in repeatcal operations.
#[derive(Error, Debug)]
pub enum RepeatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown repeat type '{0}'. Expected none, daily, weekly, monthly or yearly")]
    UnknownRepeatType(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RepeatError {
    fn from(e: serde_json::Error) -> Self {
        RepeatError::Serialization(e.to_string())
    }
}

/// Result type alias for repeatcal operations.
pub type RepeatResult<T> = Result<T, RepeatError>;
