use crate::tracker::StudyLog;

#[test]
fn test_missing_numeric_fields_default_to_zero() {
    let log: StudyLog = serde_json::from_str(r#"{"date": "2026-03-01", "dsaTopic": "Heaps"}"#).unwrap();
    assert_eq!(log.gate_hours, 0.0);
    assert_eq!(log.coding_hours, 0.0);
    assert_eq!(log.dsa_hours, 0.0);
    assert_eq!(log.revision_hours, 0.0);
    assert_eq!(log.coding_problems, 0);
    assert_eq!(log.dsa_topic, "Heaps");
    assert!(log.notes.is_empty());
}

#[test]
fn test_null_and_string_numbers_are_tolerated() {
    let log: StudyLog = serde_json::from_str(
        r#"{"date": "2026-03-01", "gateHours": "1.5", "codingHours": null, "codingProblems": "3", "dsaHours": "lots"}"#,
    )
    .unwrap();
    assert_eq!(log.gate_hours, 1.5);
    assert_eq!(log.coding_hours, 0.0);
    assert_eq!(log.coding_problems, 3);
    assert_eq!(log.dsa_hours, 0.0);
}

#[test]
fn test_negative_values_clamp_to_zero() {
    let log: StudyLog =
        serde_json::from_str(r#"{"date": "2026-03-01", "revisionHours": -2, "codingProblems": -1}"#).unwrap();
    assert_eq!(log.revision_hours, 0.0);
    assert_eq!(log.coding_problems, 0);
}

#[test]
fn test_legacy_fields_survive_and_are_ignored_by_totals() {
    let log: StudyLog = serde_json::from_str(
        r#"{"date": "2026-03-01", "studyHours": 6, "revisionDone": true, "gateHours": 2, "codingProblems": 1}"#,
    )
    .unwrap();
    assert_eq!(log.study_hours, Some(6.0));
    assert_eq!(log.total_hours(), 2.0);
}

#[test]
fn test_serializes_camel_case() {
    let mut log = StudyLog::new(chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    log.coding_problems = 2;
    log.hacker_rank_profile = "hackerrank.com/me".into();
    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(value["date"], "2026-03-01");
    assert_eq!(value["codingProblems"], 2);
    assert_eq!(value["hackerRankProfile"], "hackerrank.com/me");
    assert!(value.get("studyHours").is_none());
}
