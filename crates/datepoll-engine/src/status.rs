//! Availability ratings and the explicit "no response" state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A participant's self-reported willingness to meet on a candidate date.
///
/// Variants are declared in rank order, so the derived `Ord` follows
/// `Unavailable < EveningOnly < DaytimeOnly < AllDay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum AvailabilityStatus {
    /// Cannot attend at all.
    Unavailable = 0,
    /// Free in the evening only.
    EveningOnly = 1,
    /// Free during the day only.
    DaytimeOnly = 2,
    /// Free the whole day.
    AllDay = 3,
}

/// Every status, lowest rank first.
pub const ALL_STATUSES: [AvailabilityStatus; 4] = [
    AvailabilityStatus::Unavailable,
    AvailabilityStatus::EveningOnly,
    AvailabilityStatus::DaytimeOnly,
    AvailabilityStatus::AllDay,
];

/// A raw status value outside `0..=3`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("status {0} is outside the range 0..=3")]
pub struct StatusOutOfRange(pub i64);

impl AvailabilityStatus {
    /// Numeric rank, `0` (unavailable) through `3` (all day).
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            AvailabilityStatus::Unavailable => "unavailable",
            AvailabilityStatus::EveningOnly => "evening",
            AvailabilityStatus::DaytimeOnly => "daytime",
            AvailabilityStatus::AllDay => "all day",
        }
    }

    /// One-character symbol for compact tables.
    pub fn symbol(self) -> &'static str {
        match self {
            AvailabilityStatus::Unavailable => "×",
            AvailabilityStatus::EveningOnly => "E",
            AvailabilityStatus::DaytimeOnly => "D",
            AvailabilityStatus::AllDay => "◎",
        }
    }
}

impl TryFrom<i64> for AvailabilityStatus {
    type Error = StatusOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AvailabilityStatus::Unavailable),
            1 => Ok(AvailabilityStatus::EveningOnly),
            2 => Ok(AvailabilityStatus::DaytimeOnly),
            3 => Ok(AvailabilityStatus::AllDay),
            other => Err(StatusOutOfRange(other)),
        }
    }
}

impl From<AvailabilityStatus> for u8 {
    fn from(status: AvailabilityStatus) -> Self {
        status.rank()
    }
}

/// The state of one (participant, date) cell.
///
/// `NoResponse` is distinct from `Answered(Unavailable)`: a participant who never
/// answered for a date neither blocks nor counts toward that date.
/// Serializes as the status rank, or `null` for no response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(
    from = "Option<AvailabilityStatus>",
    into = "Option<AvailabilityStatus>"
)]
pub enum ResponseState {
    #[default]
    NoResponse,
    Answered(AvailabilityStatus),
}

impl ResponseState {
    /// The answered status, if any.
    pub fn status(self) -> Option<AvailabilityStatus> {
        match self {
            ResponseState::NoResponse => None,
            ResponseState::Answered(status) => Some(status),
        }
    }

    pub fn is_answered(self) -> bool {
        matches!(self, ResponseState::Answered(_))
    }

    /// Display symbol; `-` for no response.
    pub fn symbol(self) -> &'static str {
        match self {
            ResponseState::NoResponse => "-",
            ResponseState::Answered(status) => status.symbol(),
        }
    }
}

impl From<Option<AvailabilityStatus>> for ResponseState {
    fn from(value: Option<AvailabilityStatus>) -> Self {
        match value {
            Some(status) => ResponseState::Answered(status),
            None => ResponseState::NoResponse,
        }
    }
}

impl From<ResponseState> for Option<AvailabilityStatus> {
    fn from(state: ResponseState) -> Self {
        state.status()
    }
}
