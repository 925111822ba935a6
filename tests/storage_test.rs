use std::fs;
use std::sync::Arc;

use chrono::NaiveDate;
use gatetrack_lib::config::{self, TrackerConfig};
use gatetrack_lib::storage::{self as store_io, JsonFileStorage, Storage};
use gatetrack_lib::tracker::{ActivityLogStore, StudyLog, LOGS_KEY};
use gatetrack_lib::clock::FixedClock;
use tempfile::TempDir;

#[test]
fn test_missing_key_reads_as_absent() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path());
    assert_eq!(storage.get("gate_da_logs").unwrap(), None);
}

#[test]
fn test_set_creates_directory_and_file() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("nested/data"));
    storage.set("gate_da_logs", "[]").unwrap();

    let path = storage.path_for("gate_da_logs");
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(storage.get("gate_da_logs").unwrap().unwrap().trim(), "[]");
}

#[test]
fn test_file_backed_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let open = || {
        let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(dir.path()));
        ActivityLogStore::load(storage, Arc::new(FixedClock(today)))
    };

    let mut logs = open();
    let mut entry = StudyLog::new(today);
    entry.gate_hours = 2.0;
    logs.add_log(entry).unwrap();

    let reopened = open();
    assert_eq!(reopened.today_log().unwrap().gate_hours, 2.0);
}

#[test]
fn test_corrupt_file_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(format!("{}.json", LOGS_KEY)), "{{{{").unwrap();
    let storage = JsonFileStorage::new(dir.path());
    let logs: Vec<StudyLog> = store_io::load_or_default(&storage, LOGS_KEY);
    assert!(logs.is_empty());
}

#[test]
fn test_config_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let config = config::load_or_default(&dir.path().join("absent.toml"));
    assert_eq!(config, TrackerConfig::default());
    assert_eq!(config.plan_start, NaiveDate::from_ymd_opt(2026, 2, 19).unwrap());
    assert_eq!(config.targets.coding_problems, 2);
}

#[test]
fn test_config_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gatetrack.toml");
    fs::write(
        &path,
        r#"
plan_start = "2026-03-02"
data_dir = "/tmp/gatetrack-data"

[targets]
coding_problems = 3
"#,
    )
    .unwrap();

    let config = config::load_config(&path).unwrap();
    assert_eq!(config.plan_start, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    assert_eq!(config.targets.coding_problems, 3);
    assert_eq!(config.targets.gate_hours, 2.0);
    assert_eq!(config.resolved_data_dir(), std::path::PathBuf::from("/tmp/gatetrack-data"));
    assert!(!config.json_logs);
}

#[test]
fn test_invalid_config_is_an_error_but_load_or_default_recovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gatetrack.toml");
    fs::write(&path, "plan_start = [").unwrap();

    let err = config::load_config(&path).unwrap_err();
    assert_eq!(err.stage, "config");
    assert_eq!(config::load_or_default(&path), TrackerConfig::default());
}

#[test]
fn test_failed_write_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path());
    let path = storage.path_for("gate_da_logs");
    // A non-empty directory in the way makes the final rename fail.
    fs::create_dir_all(path.join("blocker")).unwrap();

    let err = storage.set("gate_da_logs", "[]").unwrap_err();
    assert_eq!(err.stage, "io");
    assert!(!path.with_extension("json.tmp").exists());
    assert!(path.is_dir());
}
