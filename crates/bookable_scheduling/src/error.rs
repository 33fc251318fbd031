// --- File: crates/bookable_scheduling/src/error.rs ---
use bookable_common::BookableError;
use thiserror::Error;

/// Errors raised by the availability pipeline.
///
/// The pipeline never swallows: it either returns a fully valid slot list or
/// raises one of these. A booking pointing at an unresolved service is the one
/// deliberate exception — that is a logged fallback, not an error, because one
/// dangling foreign key must not blank the whole calendar.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchedulingError {
    /// Malformed or self-contradictory operating-hours configuration.
    #[error("Invalid operating-hours configuration: {0}")]
    Configuration(String),
    /// Malformed interval or duration input.
    #[error("Invalid scheduling input: {0}")]
    Validation(String),
    /// A time field that is not `HH:MM` or `HH:MM:SS`.
    #[error("Failed to parse time of day: {0:?}")]
    TimeParse(String),
}

impl From<SchedulingError> for BookableError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::Configuration(msg) => BookableError::ConfigError(msg),
            SchedulingError::Validation(msg) => BookableError::ValidationError(msg),
            SchedulingError::TimeParse(raw) => {
                BookableError::ParseError(format!("invalid time of day: {raw:?}"))
            }
        }
    }
}
