use std::sync::Arc;

use gatetrack_lib::progress::{ProgressStore, PROGRESS_KEY};
use gatetrack_lib::storage::{MemoryStorage, Storage};
use gatetrack_lib::syllabus::{self, CATALOG};

fn store(storage: &MemoryStorage) -> ProgressStore {
    let storage: Arc<dyn Storage> = Arc::new(storage.clone());
    ProgressStore::load(storage)
}

#[test]
fn test_empty_store_reports_zero() {
    let progress = store(&MemoryStorage::new());
    assert_eq!(progress.progress(), 0);
    assert!(!progress.is_topic_completed("calculus", 0));
}

#[test]
fn test_double_toggle_restores_state() {
    let mut progress = store(&MemoryStorage::new());
    assert!(progress.toggle_topic("calculus", 0).unwrap());
    assert!(progress.is_topic_completed("calculus", 0));
    assert!(!progress.toggle_topic("calculus", 0).unwrap());
    assert!(!progress.is_topic_completed("calculus", 0));
}

#[test]
fn test_toggle_persists_wire_format() {
    let storage = MemoryStorage::new();
    let mut progress = store(&storage);
    progress.toggle_topic("prob-stats", 3).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&storage.raw(PROGRESS_KEY).unwrap()).unwrap();
    assert_eq!(raw["prob-stats-3"], true);

    let reloaded = store(&storage);
    assert!(reloaded.is_topic_completed("prob-stats", 3));
}

#[test]
fn test_out_of_range_reads_as_incomplete() {
    let storage = MemoryStorage::new();
    // A flag for a subtopic that no longer exists in the catalog.
    storage.insert_raw(PROGRESS_KEY, r#"{"ai-99": true, "nope-0": true}"#);
    let mut progress = store(&storage);

    assert!(!progress.is_topic_completed("ai", 99));
    assert!(!progress.is_topic_completed("nope", 0));
    assert_eq!(progress.progress(), 0);
    assert!(progress.toggle_topic("ai", 99).is_err());
    assert!(progress.toggle_topic("nope", 0).is_err());
}

#[test]
fn test_progress_rounds_to_nearest_percent() {
    let mut progress = store(&MemoryStorage::new());
    let total = syllabus::total_subtopics();
    assert_eq!(total, 60);

    // 1 of 60 = 1.67% -> 2
    progress.toggle_topic("ai", 0).unwrap();
    assert_eq!(progress.progress(), 2);

    // 3 of 60 = 5%
    progress.toggle_topic("ai", 1).unwrap();
    progress.toggle_topic("ai", 2).unwrap();
    assert_eq!(progress.progress(), 5);
    assert_eq!(progress.subject_progress("ai"), Some(100));
    assert_eq!(progress.subject_progress("calculus"), Some(0));
    assert_eq!(progress.subject_progress("unknown"), None);
}

#[test]
fn test_full_catalog_is_one_hundred_percent() {
    let mut progress = store(&MemoryStorage::new());
    for subject in CATALOG {
        for index in 0..subject.subtopics.len() {
            progress.toggle_topic(subject.id, index).unwrap();
            let pct = progress.progress();
            assert!(pct <= 100);
        }
    }
    assert_eq!(progress.progress(), 100);
}

#[test]
fn test_false_flags_do_not_count() {
    let storage = MemoryStorage::new();
    storage.insert_raw(PROGRESS_KEY, r#"{"calculus-0": false, "calculus-1": true}"#);
    let progress = store(&storage);
    assert!(!progress.is_topic_completed("calculus", 0));
    assert!(progress.is_topic_completed("calculus", 1));
    assert_eq!(progress.subject_progress("calculus"), Some(17));
}

#[test]
fn test_corrupt_progress_resets() {
    let storage = MemoryStorage::new();
    storage.insert_raw(PROGRESS_KEY, r#"["not", "a", "map"]"#);
    let progress = store(&storage);
    assert_eq!(progress.progress(), 0);
}

#[test]
fn test_unknown_stored_keys_are_reported_not_counted() {
    let storage = MemoryStorage::new();
    storage.insert_raw(
        PROGRESS_KEY,
        r#"{"calculus-0": true, "calculus-99": true, "retired-subject-1": true, "garbage": true}"#,
    );
    let progress = store(&storage);

    let mut unknown = progress.unknown_keys();
    unknown.sort();
    assert_eq!(unknown, vec!["calculus-99", "garbage", "retired-subject-1"]);
    assert_eq!(progress.subject_progress("calculus"), Some(17));
}
