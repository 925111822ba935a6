use std::sync::Arc;

use chrono::NaiveDate;
use gatetrack_lib::analytics::compute_dashboard;
use gatetrack_lib::clock::FixedClock;
use gatetrack_lib::config::TrackerConfig;
use gatetrack_lib::mock_tests::MockTestResult;
use gatetrack_lib::state::AppState;
use gatetrack_lib::storage::MemoryStorage;
use gatetrack_lib::tracker::StudyLog;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn state_at(today: NaiveDate) -> AppState {
    AppState::with_storage(
        TrackerConfig::default(),
        Arc::new(MemoryStorage::new()),
        Arc::new(FixedClock(today)),
    )
}

#[test]
fn test_fresh_state_before_plan_start() {
    let mut state = state_at(day(2026, 2, 1));
    let summary = compute_dashboard(&mut state);

    assert_eq!(summary.syllabus_progress, 0);
    assert_eq!(summary.total_hours, 0.0);
    assert_eq!(summary.latest_mock_score, 0.0);
    assert_eq!(summary.streak, 0);
    assert!(!summary.logged_today);
    assert!(summary.missed_yesterday);
    assert!(!summary.plan_started);
    assert_eq!(summary.current_week.unwrap().week_number, 1);
    assert_eq!(summary.total_weeks, 48);
}

#[test]
fn test_summary_reflects_all_stores() {
    let today = day(2026, 3, 2);
    let mut state = state_at(today);

    let mut yesterday = StudyLog::new(day(2026, 3, 1));
    yesterday.gate_hours = 1.0;
    yesterday.coding_problems = 1;
    state.logs.add_log(yesterday).unwrap();

    let mut todays = StudyLog::new(today);
    todays.gate_hours = 2.0;
    todays.coding_hours = 1.0;
    todays.coding_problems = 2;
    state.logs.add_log(todays).unwrap();

    state.progress.toggle_topic("ai", 0).unwrap();
    state.mock_scores.add_mock_score(MockTestResult::new(day(2026, 3, 1), 64.0, 100.0)).unwrap();

    let summary = compute_dashboard(&mut state);
    assert_eq!(summary.syllabus_progress, 2);
    assert_eq!(summary.total_hours, 4.0);
    assert_eq!(summary.latest_mock_score, 64.0);
    assert_eq!(summary.streak, 2);
    assert!(summary.logged_today);
    assert!(summary.today_target_met);
    assert!(summary.gate_goal_met);
    assert!(!summary.missed_yesterday);
    assert!(summary.plan_started);
    // 2026-02-19 + 11 days -> second week of the plan
    assert_eq!(summary.current_week.unwrap().week_number, 2);
}

#[test]
fn test_missed_alert_hidden_once_today_is_logged() {
    let today = day(2026, 3, 5);
    let mut state = state_at(today);
    assert!(compute_dashboard(&mut state).missed_yesterday);

    state.logs.add_log(StudyLog::new(today)).unwrap();
    let summary = compute_dashboard(&mut state);
    assert!(!summary.missed_yesterday);
    assert!(!summary.today_target_met);
}

#[test]
fn test_dashboard_serializes() {
    let mut state = state_at(day(2026, 3, 2));
    let summary = compute_dashboard(&mut state);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["current_week"]["weekNumber"], 2);
    assert_eq!(value["daily_goals"].as_array().unwrap().len(), 5);
}
