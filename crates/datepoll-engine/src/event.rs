//! Event records: candidate-date creation and replace-on-resubmit bookkeeping.
//!
//! An [`Event`] is a plain value that the storage layer persists however it likes.
//! Its candidate dates are fixed at creation. Each participant holds at most one
//! submission; submitting again under the same name discards the previous one
//! rather than merging into it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{Result, ValidationError};
use crate::model::{
    parse_candidate_dates, parse_date, validate_submission, Answers, AvailabilityModel,
    DATE_FORMAT,
};
use crate::snapshot::{Snapshot, Submission};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    description: String,
    dates: BTreeSet<NaiveDate>,
    /// Latest validated submission per participant, with its parsed answers.
    submissions: BTreeMap<String, (Submission, Answers)>,
}

impl Event {
    /// Create an event whose candidate dates are every day from `start` through `end`.
    ///
    /// # Errors
    ///
    /// - `EmptyEventName` if `name` is empty.
    /// - `InvalidDate` if either bound is not a `YYYY-MM-DD` date.
    /// - `InvalidRange` if `start` is after `end`.
    /// - `RangeTooLong` if `end - start` exceeds `config.max_range_days`.
    pub fn from_range(
        name: &str,
        description: &str,
        start: &str,
        end: &str,
        config: &EngineConfig,
    ) -> Result<Self> {
        let start_date = parse_date(start)?;
        let end_date = parse_date(end)?;

        if start_date > end_date {
            return Err(ValidationError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let days = (end_date - start_date).num_days();
        if days > i64::from(config.max_range_days) {
            return Err(ValidationError::RangeTooLong {
                days,
                max: config.max_range_days,
            });
        }

        let dates = start_date
            .iter_days()
            .take_while(|d| *d <= end_date)
            .collect();
        Self::new(name, description, dates)
    }

    /// Create an event with an explicit list of candidate dates.
    pub fn with_dates<S: AsRef<str>>(
        name: &str,
        description: &str,
        dates: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let dates = dates
            .into_iter()
            .map(|d| parse_date(d.as_ref()))
            .collect::<Result<BTreeSet<_>>>()?;
        Self::new(name, description, dates)
    }

    /// Rebuild an event from a stored snapshot, replaying its submissions in order.
    ///
    /// Unlike the constructors, an empty event name is accepted here: snapshots
    /// from the storage layer may omit it.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        let mut event = Event {
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            dates: parse_candidate_dates(&snapshot.candidate_dates)?,
            submissions: BTreeMap::new(),
        };
        for submission in &snapshot.responses {
            event.submit(submission.clone())?;
        }
        Ok(event)
    }

    fn new(name: &str, description: &str, dates: BTreeSet<NaiveDate>) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyEventName);
        }
        debug!(name, dates = dates.len(), "created event");
        Ok(Event {
            name: name.to_string(),
            description: description.to_string(),
            dates,
            submissions: BTreeMap::new(),
        })
    }

    /// Record a submission, replacing any earlier one from the same participant.
    ///
    /// The submission is validated first; on error the event is left unchanged.
    pub fn submit(&mut self, submission: Submission) -> Result<()> {
        let answers = validate_submission(&submission, &self.dates)?;
        let replaced = self
            .submissions
            .insert(submission.participant_name.clone(), (submission, answers))
            .is_some();
        debug!(replaced, "recorded submission");
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Candidate dates, chronological.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Names of everyone who has submitted, sorted.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.submissions.keys().map(String::as_str)
    }

    /// The current submission of `participant`, if any.
    pub fn submission(&self, participant: &str) -> Option<&Submission> {
        self.submissions.get(participant).map(|(s, _)| s)
    }

    /// A snapshot of the current state, suitable for storage or evaluation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            candidate_dates: self
                .dates
                .iter()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
            responses: self
                .submissions
                .values()
                .map(|(submission, _)| submission.clone())
                .collect(),
        }
    }

    /// Build an evaluation model from the current state without revalidating.
    pub fn model(&self) -> AvailabilityModel {
        let answers: HashMap<String, Answers> = self
            .submissions
            .iter()
            .map(|(name, (_, answers))| (name.clone(), answers.clone()))
            .collect();
        AvailabilityModel::from_parts(self.dates.clone(), answers)
    }
}
