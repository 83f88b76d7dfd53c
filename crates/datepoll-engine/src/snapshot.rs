//! Raw snapshot types as delivered by the storage layer.
//!
//! These mirror the JSON request/response payloads one to one and carry no
//! validation of their own; [`AvailabilityModel::from_snapshot`] validates them.
//! Field names are camelCase on the wire, with snake_case accepted as aliases.
//!
//! [`AvailabilityModel::from_snapshot`]: crate::model::AvailabilityModel::from_snapshot

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A point-in-time copy of one event's candidate dates and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Event name, if the storage layer provides it.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Candidate dates as `YYYY-MM-DD` strings.
    #[serde(default, alias = "candidate_dates", alias = "dates")]
    pub candidate_dates: Vec<String>,
    /// One record per submission. Later records replace earlier ones with the same name.
    #[serde(default)]
    pub responses: Vec<Submission>,
}

/// One participant's full set of answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(alias = "participant_name")]
    pub participant_name: String,
    #[serde(default, alias = "responses")]
    pub entries: Vec<SubmittedEntry>,
}

/// A single `{date, status}` answer inside a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedEntry {
    pub date: String,
    /// Raw rank as sent on the wire. Anything other than an integer in `0..=3`
    /// (fractions and oversized integers included) is rejected during model
    /// construction with `INVALID_STATUS`.
    pub status: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Snapshot {
    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build a snapshot from candidate dates and submissions.
    pub fn new<S: Into<String>>(
        candidate_dates: impl IntoIterator<Item = S>,
        responses: Vec<Submission>,
    ) -> Self {
        Snapshot {
            candidate_dates: candidate_dates.into_iter().map(Into::into).collect(),
            responses,
            ..Snapshot::default()
        }
    }
}

impl Submission {
    pub fn new(participant_name: impl Into<String>) -> Self {
        Submission {
            participant_name: participant_name.into(),
            entries: Vec::new(),
        }
    }

    /// Add an answer (builder style).
    pub fn entry(mut self, date: impl Into<String>, status: i64) -> Self {
        self.entries.push(SubmittedEntry {
            date: date.into(),
            status: Number::from(status),
            comment: None,
        });
        self
    }

    /// Add an answer carrying a free-text comment (builder style).
    pub fn entry_with_comment(
        mut self,
        date: impl Into<String>,
        status: i64,
        comment: impl Into<String>,
    ) -> Self {
        self.entries.push(SubmittedEntry {
            date: date.into(),
            status: Number::from(status),
            comment: Some(comment.into()),
        });
        self
    }

    /// Parse a single submission from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
