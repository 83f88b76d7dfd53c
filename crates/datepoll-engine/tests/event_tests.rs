//! Tests for event creation and replace-on-resubmit.

use chrono::NaiveDate;
use datepoll_engine::{
    evaluate, AvailabilityModel, AvailabilityStatus, EngineConfig, Event, ResponseState,
    Submission, ValidationError,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn config() -> EngineConfig {
    EngineConfig::default()
}

// ── from_range ──────────────────────────────────────────────────────────────

#[test]
fn range_is_inclusive() {
    let event =
        Event::from_range("Dinner", "", "2026-11-28", "2026-12-02", &config()).unwrap();

    let dates: Vec<NaiveDate> = event.dates().collect();
    assert_eq!(
        dates,
        [
            date("2026-11-28"),
            date("2026-11-29"),
            date("2026-11-30"),
            date("2026-12-01"),
            date("2026-12-02"),
        ]
    );
}

#[test]
fn single_day_range() {
    let event = Event::from_range("Lunch", "", "2026-11-02", "2026-11-02", &config()).unwrap();
    assert_eq!(event.dates().count(), 1);
}

#[test]
fn range_at_limit_is_accepted() {
    // 35 days between start and end: 36 candidate dates.
    let event = Event::from_range("Trip", "", "2026-01-01", "2026-02-05", &config()).unwrap();
    assert_eq!(event.dates().count(), 36);
}

#[test]
fn range_over_limit_is_rejected() {
    let err = Event::from_range("Trip", "", "2026-01-01", "2026-02-06", &config()).unwrap_err();
    assert_eq!(err, ValidationError::RangeTooLong { days: 36, max: 35 });
    assert_eq!(err.code(), "RANGE_TOO_LONG");
}

#[test]
fn configured_limit_is_honoured() {
    let config = EngineConfig { max_range_days: 6 };
    assert!(Event::from_range("Week", "", "2026-03-01", "2026-03-07", &config).is_ok());
    assert!(Event::from_range("Week", "", "2026-03-01", "2026-03-08", &config).is_err());
}

#[test]
fn reversed_range_is_rejected() {
    let err = Event::from_range("X", "", "2026-11-05", "2026-11-01", &config()).unwrap_err();
    assert_eq!(err.code(), "INVALID_RANGE");
}

#[test]
fn malformed_bound_is_rejected() {
    let err = Event::from_range("X", "", "11/01/2026", "2026-11-05", &config()).unwrap_err();
    assert_eq!(err, ValidationError::InvalidDate("11/01/2026".to_string()));
}

#[test]
fn empty_event_name_is_rejected() {
    for name in ["", "  "] {
        let err = Event::from_range(name, "", "2026-11-01", "2026-11-02", &config()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyEventName);
        assert_eq!(err.code(), "EMPTY_EVENT_NAME");
    }
}

// ── submit ──────────────────────────────────────────────────────────────────

#[test]
fn resubmission_replaces_never_merges() {
    let mut event =
        Event::with_dates("Dinner", "", ["2026-11-01", "2026-11-02", "2026-11-03"]).unwrap();

    event
        .submit(Submission::new("P").entry("2026-11-01", 3).entry("2026-11-02", 3))
        .unwrap();
    event
        .submit(Submission::new("P").entry("2026-11-01", 2).entry("2026-11-03", 1))
        .unwrap();

    // Rebuild from the stored snapshot, as the request layer would.
    let model = AvailabilityModel::from_snapshot(&event.snapshot()).unwrap();
    assert_eq!(model.all_participants(), ["P"]);
    assert_eq!(model.status_of("P", date("2026-11-02")), ResponseState::NoResponse);
    assert_eq!(
        model.status_of("P", date("2026-11-01")),
        ResponseState::Answered(AvailabilityStatus::DaytimeOnly)
    );
    assert_eq!(
        model.status_of("P", date("2026-11-03")),
        ResponseState::Answered(AvailabilityStatus::EveningOnly)
    );
}

#[test]
fn invalid_submission_leaves_event_unchanged() {
    let mut event = Event::with_dates("Dinner", "", ["2026-11-01"]).unwrap();
    event
        .submit(Submission::new("P").entry("2026-11-01", 3))
        .unwrap();

    let before = event.clone();
    let err = event
        .submit(Submission::new("P").entry("2026-12-25", 3))
        .unwrap_err();

    assert_eq!(err.code(), "UNKNOWN_DATE");
    assert_eq!(event, before);
}

#[test]
fn blank_participant_name_is_rejected() {
    let mut event = Event::with_dates("Dinner", "", ["2026-11-01"]).unwrap();
    let err = event
        .submit(Submission::new(" ").entry("2026-11-01", 3))
        .unwrap_err();
    assert_eq!(err.code(), "EMPTY_NAME");
    assert_eq!(event.participants().count(), 0);
}

#[test]
fn stale_date_from_earlier_event_is_rejected() {
    let mut event = Event::with_dates("Dinner", "", ["2026-11-01", "2026-11-02"]).unwrap();
    let err = event
        .submit(Submission::new("P").entry("2026-10-31", 3))
        .unwrap_err();
    assert_eq!(err.code(), "UNKNOWN_DATE");
}

#[test]
fn model_matches_model_built_from_snapshot() {
    let mut event = Event::with_dates("Dinner", "Team dinner", ["2026-11-01", "2026-11-02"]).unwrap();
    event
        .submit(Submission::new("A").entry("2026-11-01", 3).entry("2026-11-02", 1))
        .unwrap();
    event
        .submit(Submission::new("B").entry_with_comment("2026-11-01", 2, "lunch only"))
        .unwrap();

    let direct = event.model();
    let rebuilt = AvailabilityModel::from_snapshot(&event.snapshot()).unwrap();
    assert_eq!(direct, rebuilt);
    assert_eq!(evaluate(&direct), evaluate(&rebuilt));
}

#[test]
fn snapshot_roundtrips_through_event() {
    let mut event = Event::with_dates("Dinner", "Team dinner", ["2026-11-02", "2026-11-01"]).unwrap();
    event
        .submit(Submission::new("B").entry("2026-11-01", 3))
        .unwrap();
    event
        .submit(Submission::new("A").entry("2026-11-02", 0))
        .unwrap();

    let snapshot = event.snapshot();
    assert_eq!(snapshot.name, "Dinner");
    assert_eq!(snapshot.candidate_dates, ["2026-11-01", "2026-11-02"]);
    assert_eq!(snapshot.responses[0].participant_name, "A");

    let restored = Event::from_snapshot(&snapshot).unwrap();
    assert_eq!(restored, event);
    assert_eq!(restored.participants().collect::<Vec<_>>(), ["A", "B"]);
    assert!(restored.submission("B").is_some());
}
