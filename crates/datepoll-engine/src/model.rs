//! Normalized, read-only view of one event's candidate dates and responses.
//!
//! An [`AvailabilityModel`] is built from a [`Snapshot`] per request, answers lookups
//! in O(1) amortized time, and is discarded once the caller has rendered its output.
//! Construction is the only place where input is validated; everything downstream
//! (evaluation, pivoting, results) is total over a successfully built model.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::snapshot::{Snapshot, Submission};
use crate::status::{AvailabilityStatus, ResponseState};

/// `YYYY-MM-DD`, the only date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static NO_RESPONDENTS: BTreeSet<String> = BTreeSet::new();

/// A single validated answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Answer {
    pub status: AvailabilityStatus,
    pub comment: Option<String>,
}

/// A participant's validated answers, keyed by date.
pub(crate) type Answers = HashMap<NaiveDate, Answer>;

/// Availability of every participant on every candidate date of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityModel {
    /// Candidate dates, chronological.
    dates: Vec<NaiveDate>,
    /// Participant names, lexicographic.
    names: Vec<String>,
    answers: HashMap<String, Answers>,
    respondents: HashMap<NaiveDate, BTreeSet<String>>,
}

impl AvailabilityModel {
    /// Build a model from a raw snapshot.
    ///
    /// Every submission is validated. When several submissions share a participant
    /// name, the last one replaces the earlier ones entirely.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if a participant name is empty or only whitespace.
    /// - `InvalidStatus` if a status is outside `0..=3`.
    /// - `UnknownDate` if an answer refers to a date that is not a candidate date.
    /// - `InvalidDate` if a candidate date is not a valid `YYYY-MM-DD` date.
    /// - `DuplicateEntry` if one submission answers the same date twice.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let candidates = parse_candidate_dates(&snapshot.candidate_dates)?;

        let mut answers: HashMap<String, Answers> = HashMap::new();
        for submission in &snapshot.responses {
            let validated = validate_submission(submission, &candidates)?;
            answers.insert(submission.participant_name.clone(), validated);
        }

        let model = Self::from_parts(candidates, answers);
        debug!(
            dates = model.dates.len(),
            participants = model.names.len(),
            "built availability model"
        );
        Ok(model)
    }

    /// Assemble a model from already-validated parts.
    pub(crate) fn from_parts(
        candidates: BTreeSet<NaiveDate>,
        answers: HashMap<String, Answers>,
    ) -> Self {
        let mut respondents: HashMap<NaiveDate, BTreeSet<String>> = HashMap::new();
        for (name, by_date) in &answers {
            for date in by_date.keys() {
                respondents.entry(*date).or_default().insert(name.clone());
            }
        }

        let mut names: Vec<String> = answers.keys().cloned().collect();
        names.sort();

        AvailabilityModel {
            dates: candidates.into_iter().collect(),
            names,
            answers,
            respondents,
        }
    }

    /// The state of `participant`'s answer on `date`; `NoResponse` if there is none.
    pub fn status_of(&self, participant: &str, date: NaiveDate) -> ResponseState {
        self.answer(participant, date)
            .map(|answer| ResponseState::Answered(answer.status))
            .unwrap_or(ResponseState::NoResponse)
    }

    /// The comment attached to `participant`'s answer on `date`, if any.
    pub fn comment_of(&self, participant: &str, date: NaiveDate) -> Option<&str> {
        self.answer(participant, date)
            .and_then(|answer| answer.comment.as_deref())
    }

    /// Names of everyone who answered on `date`, including `Unavailable` answers.
    pub fn participants_responding_on(&self, date: NaiveDate) -> &BTreeSet<String> {
        self.respondents.get(&date).unwrap_or(&NO_RESPONDENTS)
    }

    /// All participant names, sorted lexicographically.
    pub fn all_participants(&self) -> &[String] {
        &self.names
    }

    /// All candidate dates, sorted chronologically.
    pub fn all_dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    fn answer(&self, participant: &str, date: NaiveDate) -> Option<&Answer> {
        self.answers.get(participant)?.get(&date)
    }
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// Input must round-trip through [`DATE_FORMAT`]: surrounding whitespace and
/// unpadded months or days (`2026-11-2`) are rejected.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
}

/// Parse candidate dates, collapsing duplicates.
pub(crate) fn parse_candidate_dates(raw: &[String]) -> Result<BTreeSet<NaiveDate>> {
    raw.iter().map(|d| parse_date(d)).collect()
}

/// Validate one submission against the candidate dates.
pub(crate) fn validate_submission(
    submission: &Submission,
    candidates: &BTreeSet<NaiveDate>,
) -> Result<Answers> {
    let participant = &submission.participant_name;
    if participant.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let mut answers = Answers::with_capacity(submission.entries.len());
    for entry in &submission.entries {
        let date = match parse_date(&entry.date) {
            Ok(date) if candidates.contains(&date) => date,
            _ => {
                return Err(ValidationError::UnknownDate {
                    participant: participant.clone(),
                    date: entry.date.clone(),
                })
            }
        };

        let status = entry
            .status
            .as_i64()
            .and_then(|raw| AvailabilityStatus::try_from(raw).ok())
            .ok_or_else(|| ValidationError::InvalidStatus {
                participant: participant.clone(),
                date: entry.date.clone(),
                value: entry.status.to_string(),
            })?;

        let comment = entry.comment.clone().filter(|c| !c.is_empty());
        if answers.insert(date, Answer { status, comment }).is_some() {
            return Err(ValidationError::DuplicateEntry {
                participant: participant.clone(),
                date: entry.date.clone(),
            });
        }
    }

    Ok(answers)
}
