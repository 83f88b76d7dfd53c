//! Pairwise compatibility and per-date feasibility.
//!
//! A date is feasible when at least two participants answered on it and every
//! unordered pair of those participants can meet. Participants who did not answer
//! for a date are left out of that date's check entirely.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::AvailabilityModel;
use crate::status::AvailabilityStatus;

/// Feasibility of one candidate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFeasibility {
    pub date: NaiveDate,
    pub feasible: bool,
}

/// Whether two participants with the given answers can meet on the same day.
///
/// - `Unavailable` on either side blocks the meeting.
/// - `AllDay` is compatible with every other available answer.
/// - Otherwise both sides must name the same window: daytime with daytime, or
///   evening with evening.
///
/// Symmetric in its arguments.
pub fn can_meet(a: AvailabilityStatus, b: AvailabilityStatus) -> bool {
    use AvailabilityStatus::*;

    match (a, b) {
        (Unavailable, _) | (_, Unavailable) => false,
        (AllDay, _) | (_, AllDay) => true,
        (a, b) => a == b,
    }
}

/// Whether every pair of participants who answered on `date` can meet.
///
/// Dates with fewer than two respondents are never feasible.
pub fn is_date_feasible(model: &AvailabilityModel, date: NaiveDate) -> bool {
    let answered: Vec<(&str, AvailabilityStatus)> = model
        .participants_responding_on(date)
        .iter()
        .filter_map(|name| {
            model
                .status_of(name, date)
                .status()
                .map(|status| (name.as_str(), status))
        })
        .collect();

    if answered.len() < 2 {
        return false;
    }

    for (i, &(name_a, status_a)) in answered.iter().enumerate() {
        for &(name_b, status_b) in &answered[i + 1..] {
            if !can_meet(status_a, status_b) {
                trace!(%date, name_a, name_b, "pair cannot meet");
                return false;
            }
        }
    }

    true
}

/// Evaluate every candidate date, in chronological order.
///
/// The result always has exactly one entry per candidate date.
pub fn evaluate(model: &AvailabilityModel) -> Vec<DateFeasibility> {
    let results: Vec<DateFeasibility> = model
        .all_dates()
        .iter()
        .map(|&date| DateFeasibility {
            date,
            feasible: is_date_feasible(model, date),
        })
        .collect();

    debug!(
        dates = results.len(),
        feasible = results.iter().filter(|r| r.feasible).count(),
        "evaluated candidate dates"
    );
    results
}

/// Only the candidate dates that everyone who answered can attend.
pub fn feasible_dates(model: &AvailabilityModel) -> Vec<NaiveDate> {
    evaluate(model)
        .into_iter()
        .filter(|r| r.feasible)
        .map(|r| r.date)
        .collect()
}
