use crate::{Competition, CoreError, DEFAULT_STARTING_BALANCE, NewCompetition};

use serde_json::json;

#[test]
fn given_calendar_dates_when_built_then_spans_whole_days() {
    let competition = NewCompetition::from_dates(
        "Autumn Cup",
        Some("Quarterly league"),
        "2026-11-01",
        "2026-11-30",
        None,
    )
    .unwrap();

    let body = serde_json::to_value(&competition).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Autumn Cup",
            "description": "Quarterly league",
            "startDate": "2026-11-01T00:00:00",
            "endDate": "2026-11-30T23:59:59",
            "startingBalance": DEFAULT_STARTING_BALANCE
        })
    );
}

#[test]
fn given_single_day_when_built_then_ok() {
    let competition =
        NewCompetition::from_dates("Sprint", None, "2026-12-01", "2026-12-01", Some(1000.0))
            .unwrap();
    assert!(competition.end_date > competition.start_date);
    assert_eq!(competition.description, "");
}

#[test]
fn given_end_before_start_when_built_then_validation_error() {
    let result = NewCompetition::from_dates("Cup", None, "2026-12-02", "2026-12-01", None);
    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_bad_date_when_built_then_invalid_date() {
    let result = NewCompetition::from_dates("Cup", None, "12/01/2026", "2026-12-01", None);
    assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
}

#[test]
fn given_blank_name_or_bad_balance_when_built_then_validation_error() {
    assert!(NewCompetition::from_dates(" ", None, "2026-12-01", "2026-12-02", None).is_err());
    assert!(
        NewCompetition::from_dates("Cup", None, "2026-12-01", "2026-12-02", Some(0.0)).is_err()
    );
}

#[test]
fn given_null_name_when_competitions_decoded_then_list_survives() {
    let raw = json!([
        { "id": 1, "name": null, "description": null, "startingBalance": 50000.0 },
        { "id": 2, "name": "Winter Open" }
    ]);

    let competitions: Vec<Competition> = serde_json::from_value(raw).unwrap();

    assert_eq!(competitions[0].name, "");
    assert_eq!(competitions[0].description, None);
    assert_eq!(competitions[1].name, "Winter Open");
}
