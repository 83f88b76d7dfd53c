//! Error types for datepoll-engine operations.

use thiserror::Error;

/// Malformed or out-of-domain input, detected while building a model or an event.
///
/// Each variant maps to a stable, machine-readable reason code (see [`ValidationError::code`])
/// that callers translate into user-facing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A participant submitted a response without a name.
    #[error("participant name must not be empty")]
    EmptyName,

    /// A status value outside the four defined ranks (0..=3).
    #[error("invalid status {value} for participant '{participant}' on {date}")]
    InvalidStatus {
        participant: String,
        date: String,
        value: String,
    },

    /// A response refers to a date that is not one of the event's candidate dates.
    #[error("date '{date}' from participant '{participant}' is not a candidate date")]
    UnknownDate { participant: String, date: String },

    /// A candidate date (or range bound) that is not a valid `YYYY-MM-DD` date.
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A single submission lists the same date more than once.
    #[error("participant '{participant}' answered {date} more than once")]
    DuplicateEntry { participant: String, date: String },

    /// An event was created without a name.
    #[error("event name must not be empty")]
    EmptyEventName,

    /// The start of a date range falls after its end.
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: String, end: String },

    /// A date range spans more days than the configured maximum.
    #[error("date range spans {days} days, maximum is {max}")]
    RangeTooLong { days: i64, max: u32 },
}

impl ValidationError {
    /// Machine-readable reason code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "EMPTY_NAME",
            ValidationError::InvalidStatus { .. } => "INVALID_STATUS",
            ValidationError::UnknownDate { .. } => "UNKNOWN_DATE",
            ValidationError::InvalidDate(_) => "INVALID_DATE",
            ValidationError::DuplicateEntry { .. } => "DUPLICATE_ENTRY",
            ValidationError::EmptyEventName => "EMPTY_EVENT_NAME",
            ValidationError::InvalidRange { .. } => "INVALID_RANGE",
            ValidationError::RangeTooLong { .. } => "RANGE_TOO_LONG",
        }
    }
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience alias used throughout datepoll-engine.
pub type Result<T> = std::result::Result<T, ValidationError>;
