//! Integration tests for input parsing, roster lookup, filtering and the dataset store.

use chrono::NaiveDate;
use lineup_index::{
    parse_clock, ActionKind, AnalysisConfig, AnalysisError, Dataset, FoulSide, MatchFilter,
    MatchRecord, Period, Roster, UNKNOWN_PLAYER_NAME,
};

#[test]
fn clock_parses_minutes_and_seconds() {
    assert_eq!(parse_clock("15:00"), Some(900));
    assert_eq!(parse_clock(" 0:59 "), Some(59));
    assert_eq!(parse_clock("725"), Some(725));
    assert_eq!(parse_clock("10:75"), None);
    assert_eq!(parse_clock("ab:00"), None);
}

#[test]
fn match_record_parses_from_json() {
    let raw = r#"{
        "date": "2024-03-02",
        "competition": "League",
        "starting_lineup": ["GK", "A", "B", "C", "D"],
        "substitution_events": [
            {
                "period": "first_half", "time_offset_seconds": "15:00",
                "player_out_id": "B", "player_in_id": "E"
            }
        ],
        "event_log": [
            {
                "period": "second_half", "time_offset_seconds": 120,
                "player_id": "A", "action_kind": "goal", "method": "Counter"
            },
            {
                "period": "first_half", "time_offset_seconds": "02:30",
                "player_id": "C", "action_kind": "foul", "foul_side": "received"
            },
            {
                "period": "first_half", "time_offset_seconds": 5,
                "action_kind": "goal", "is_opponent_event": true
            }
        ],
        "possession_seconds_with_ball": 1300.5
    }"#;
    let record: MatchRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 2));
    assert_eq!(record.substitution_events[0].time_offset_seconds, 900);
    assert_eq!(record.substitution_events[0].absolute_seconds(), 900);
    assert_eq!(record.event_log[0].absolute_seconds(), 1320);
    assert_eq!(record.event_log[1].time_offset_seconds, 150);
    assert_eq!(record.event_log[1].action_kind, ActionKind::Foul);
    assert_eq!(record.event_log[1].foul_side, Some(FoulSide::Received));
    assert!(record.event_log[2].is_opponent_event);
    assert_eq!(record.possession_totals(), (1300.5, 0.0));
}

#[test]
fn invalid_clock_is_a_parse_error() {
    let raw = r#"{
        "period": "first_half", "time_offset_seconds": "7:99",
        "player_out_id": "B", "player_in_id": "E"
    }"#;
    assert!(serde_json::from_str::<lineup_index::Substitution>(raw).is_err());
}

#[test]
fn second_half_offsets_start_at_1200() {
    assert_eq!(Period::FirstHalf.absolute_seconds(600), 600);
    assert_eq!(Period::SecondHalf.absolute_seconds(600), 1800);
}

#[test]
fn config_defaults_fill_missing_fields() {
    let config: AnalysisConfig = serde_json::from_str(r#"{ "display_count": 5 }"#).unwrap();
    assert_eq!(config.display_count, 5);
    assert_eq!(config.min_on_court_seconds, 180);
    assert_eq!(config.weights.goal_scored, 4.0);
    assert!(config.validate().is_ok());
}

#[test]
fn roster_reads_csv() {
    let csv = "player_id,name,nickname,photo\nA,Alice Example,Ali,a.png\nB,Bob,,\n";
    let roster = Roster::from_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.member("A").display_name, "Ali");
    assert_eq!(roster.member("B").display_name, "Bob");
    assert_eq!(roster.member("B").photo, "");
    assert_eq!(roster.member(" A ").photo, "a.png");
    assert_eq!(roster.member("Q").display_name, UNKNOWN_PLAYER_NAME);
}

#[test]
fn roster_csv_missing_id_column_fails() {
    let csv = "name,nickname\nAlice,Ali\n";
    assert!(matches!(
        Roster::from_csv_reader(csv.as_bytes()),
        Err(AnalysisError::RosterCsv(_))
    ));
}

#[test]
fn roster_round_trips_as_json_list() {
    let roster: Roster =
        serde_json::from_str(r#"[{ "player_id": "A", "name": "Alice" }]"#).unwrap();
    assert_eq!(roster.member("A").display_name, "Alice");
    let json = serde_json::to_value(&roster).unwrap();
    assert_eq!(json[0]["player_id"], "A");
}

#[test]
fn date_filter_excludes_undated_matches() {
    let mut dated = MatchRecord::new(["GK", "A", "B", "C", "D"]);
    dated.date = NaiveDate::from_ymd_opt(2024, 5, 1);
    let undated = MatchRecord::new(["GK", "A", "B", "C", "D"]);
    let filter = MatchFilter {
        from: NaiveDate::from_ymd_opt(2024, 1, 1),
        to: NaiveDate::from_ymd_opt(2024, 5, 1),
        ..MatchFilter::default()
    };
    assert!(filter.accepts(&dated));
    assert!(!filter.accepts(&undated));

    let later = MatchFilter {
        from: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..MatchFilter::default()
    };
    assert!(!later.accepts(&dated));
    assert!(MatchFilter::default().accepts(&undated));
}

#[test]
fn opponent_filter_is_case_insensitive() {
    let mut record = MatchRecord::new(["GK", "A", "B", "C", "D"]);
    record.opponent = Some("Rivals FC".to_string());
    let filter = MatchFilter {
        opponent: Some("rivals fc".to_string()),
        ..MatchFilter::default()
    };
    assert!(filter.accepts(&record));
    record.opponent = None;
    assert!(!filter.accepts(&record));
}

#[test]
fn dataset_rejects_duplicate_and_unknown_matches() {
    let mut dataset = Dataset::new();
    let record = MatchRecord::new(["GK", "A", "B", "C", "D"]);
    let id = record.id;
    dataset.add_match(record.clone()).unwrap();
    assert_eq!(dataset.add_match(record), Err(AnalysisError::DuplicateMatch(id)));
    assert_eq!(dataset.remove_match(id).unwrap().id, id);
    assert_eq!(dataset.remove_match(id), Err(AnalysisError::MatchNotFound(id)));
}
