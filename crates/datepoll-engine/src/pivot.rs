//! Participant × date display matrix.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::AvailabilityModel;
use crate::status::ResponseState;

/// One participant's row: a cell for every candidate date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotRow {
    pub participant: String,
    pub cells: Vec<PivotCell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotCell {
    pub date: NaiveDate,
    /// Status rank, or `null` when the participant did not answer.
    pub status: ResponseState,
}

/// Pivot the model into rows sorted by participant name, cells sorted by date.
pub fn pivot(model: &AvailabilityModel) -> Vec<PivotRow> {
    model
        .all_participants()
        .iter()
        .map(|participant| PivotRow {
            participant: participant.clone(),
            cells: model
                .all_dates()
                .iter()
                .map(|&date| PivotCell {
                    date,
                    status: model.status_of(participant, date),
                })
                .collect(),
        })
        .collect()
}
