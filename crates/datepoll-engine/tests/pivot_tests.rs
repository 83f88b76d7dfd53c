//! Tests for the participant × date matrix and the per-date results listing.

use chrono::NaiveDate;
use datepoll_engine::{
    date_results, event_results, pivot, AvailabilityModel, AvailabilityStatus, ResponseState,
    Snapshot, Submission,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const D1: &str = "2026-11-02";
const D2: &str = "2026-11-03";

fn sample() -> AvailabilityModel {
    let snapshot = Snapshot::new(
        [D2, D1],
        vec![
            Submission::new("Carol").entry(D1, 1),
            Submission::new("Alice").entry(D1, 3).entry(D2, 0),
            Submission::new("Bob")
                .entry_with_comment(D1, 2, "until 5pm")
                .entry(D2, 3),
        ],
    );
    AvailabilityModel::from_snapshot(&snapshot).unwrap()
}

// ── pivot ───────────────────────────────────────────────────────────────────

#[test]
fn rows_sorted_by_name_and_cells_by_date() {
    let rows = pivot(&sample());

    let names: Vec<&str> = rows.iter().map(|r| r.participant.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);

    for row in &rows {
        let dates: Vec<NaiveDate> = row.cells.iter().map(|c| c.date).collect();
        assert_eq!(dates, [date(D1), date(D2)]);
    }
}

#[test]
fn missing_answers_become_no_response_cells() {
    let rows = pivot(&sample());
    let carol = &rows[2];

    assert_eq!(
        carol.cells[0].status,
        ResponseState::Answered(AvailabilityStatus::EveningOnly)
    );
    assert_eq!(carol.cells[1].status, ResponseState::NoResponse);
}

#[test]
fn pivot_serializes_status_as_rank_or_null() {
    let json = serde_json::to_value(pivot(&sample())).unwrap();

    assert_eq!(json[0]["participant"], "Alice");
    assert_eq!(json[0]["cells"][0]["date"], "2026-11-02");
    assert_eq!(json[0]["cells"][0]["status"], 3);
    assert_eq!(json[0]["cells"][1]["status"], 0);
    assert!(json[2]["cells"][1]["status"].is_null());
}

#[test]
fn pivot_is_idempotent() {
    let model = sample();
    assert_eq!(pivot(&model), pivot(&model));
}

#[test]
fn pivot_of_empty_model_is_empty() {
    let model = AvailabilityModel::from_snapshot(&Snapshot::new([D1], vec![])).unwrap();
    assert!(pivot(&model).is_empty());
}

// ── date_results ────────────────────────────────────────────────────────────

#[test]
fn results_list_answers_per_date() {
    let results = date_results(&sample());
    assert_eq!(results.len(), 2);

    let first = &results[0];
    assert_eq!(first.date, date(D1));
    assert!(!first.feasible);
    let names: Vec<&str> = first
        .responses
        .iter()
        .map(|r| r.participant_name.as_str())
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
    assert_eq!(first.responses[1].comment.as_deref(), Some("until 5pm"));

    // Carol did not answer D2.
    let second = &results[1];
    assert_eq!(second.responses.len(), 2);
    assert_eq!(second.responses[0].status, AvailabilityStatus::Unavailable);
}

#[test]
fn results_agree_with_evaluate() {
    let model = sample();
    let flags: Vec<bool> = datepoll_engine::evaluate(&model)
        .iter()
        .map(|r| r.feasible)
        .collect();
    let from_results: Vec<bool> = date_results(&model).iter().map(|r| r.feasible).collect();
    assert_eq!(flags, from_results);
}

#[test]
fn event_results_carry_name_and_description() {
    let mut snapshot = Snapshot::new(
        [D1],
        vec![
            Submission::new("A").entry(D1, 3),
            Submission::new("B").entry(D1, 2),
        ],
    );
    snapshot.name = "Team dinner".to_string();
    snapshot.description = "End of quarter".to_string();
    let model = AvailabilityModel::from_snapshot(&snapshot).unwrap();

    let page = event_results(&snapshot, &model);
    assert_eq!(page.name, "Team dinner");
    assert_eq!(page.description, "End of quarter");
    assert_eq!(page.results, date_results(&model));
    assert!(page.results[0].feasible);
}
