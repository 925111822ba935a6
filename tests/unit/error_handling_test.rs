use crate::error::TrackerError;
use crate::progress::SubtopicKey;

#[test]
fn test_error_creation() {
    let error = TrackerError::new("Test error", "test_stage");
    assert_eq!(error.message, "Test error");
    assert_eq!(error.stage, "test_stage");
    assert!(error.context.is_none());
}

#[test]
fn test_error_with_context() {
    let error = TrackerError::new("Test error", "test_stage")
        .with_context("Additional context");
    assert_eq!(error.context.as_deref(), Some("Additional context"));
}

#[test]
fn test_error_display() {
    let error = TrackerError::new("Test error", "test_stage")
        .with_context("context")
        .with_source("source");
    let display = format!("{}", error);
    assert!(display.starts_with("[test_stage] Test error"));
    assert!(display.contains("(context: context)"));
    assert!(display.contains("(source: source)"));
}

#[test]
fn test_json_error_conversion() {
    let err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
    let error = TrackerError::from(err);
    assert_eq!(error.stage, "json_parse");
    assert_eq!(error.source.as_deref(), Some("serde_json"));
}

#[test]
fn test_bad_date_is_input_error() {
    let error = crate::clock::parse_date("2026-13-01").unwrap_err();
    assert_eq!(error.stage, "input");
    assert!(error.context.unwrap().contains("2026-13-01"));
}

#[test]
fn test_subtopic_key_splits_on_last_hyphen() {
    let key: SubtopicKey = "prob-stats-12".parse().unwrap();
    assert_eq!(key.subject_id, "prob-stats");
    assert_eq!(key.index, 12);
    assert_eq!(key.to_string(), "prob-stats-12");
}

#[test]
fn test_subtopic_key_rejects_garbage() {
    assert!("calculus".parse::<SubtopicKey>().is_err());
    assert!("-3".parse::<SubtopicKey>().is_err());
    assert!("calculus-x".parse::<SubtopicKey>().is_err());
}
