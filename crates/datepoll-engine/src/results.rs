//! Per-date results listing.
//!
//! For each candidate date: its feasibility and who answered what, sorted by name.
//! This is the date-major counterpart of [`pivot`](crate::pivot::pivot).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::compatibility::is_date_feasible;
use crate::model::AvailabilityModel;
use crate::snapshot::Snapshot;
use crate::status::AvailabilityStatus;

/// The full results page for one event: its name, description and per-date listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResults {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub results: Vec<DateResult>,
}

/// Everything known about one candidate date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateResult {
    pub date: NaiveDate,
    pub feasible: bool,
    /// Answers given on this date, sorted by participant name.
    pub responses: Vec<DateResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateResponse {
    pub participant_name: String,
    pub status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// List every candidate date with its feasibility and answers, chronologically.
pub fn date_results(model: &AvailabilityModel) -> Vec<DateResult> {
    model
        .all_dates()
        .iter()
        .map(|&date| {
            // BTreeSet iteration keeps names sorted.
            let responses = model
                .participants_responding_on(date)
                .iter()
                .filter_map(|name| {
                    let status = model.status_of(name, date).status()?;
                    Some(DateResponse {
                        participant_name: name.clone(),
                        status,
                        comment: model.comment_of(name, date).map(str::to_string),
                    })
                })
                .collect();

            DateResult {
                date,
                feasible: is_date_feasible(model, date),
                responses,
            }
        })
        .collect()
}

/// Attach the snapshot's event name and description to [`date_results`].
///
/// `model` must have been built from `snapshot`.
pub fn event_results(snapshot: &Snapshot, model: &AvailabilityModel) -> EventResults {
    EventResults {
        name: snapshot.name.clone(),
        description: snapshot.description.clone(),
        results: date_results(model),
    }
}
