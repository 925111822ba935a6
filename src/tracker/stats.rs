//! Aggregates derived from the log collection. Nothing here is cached; every
//! figure is recomputed from the logs passed in.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::tracker::model::{DailyTargets, DayStatus, StudyLog};

/// Sum of all tracked hours across every log.
pub fn total_hours(logs: &[StudyLog]) -> f64 {
    logs.iter().map(StudyLog::total_hours).sum()
}

/// Streak count: logs with any coding activity.
pub fn active_days(logs: &[StudyLog]) -> usize {
    logs.iter().filter(|l| l.is_active()).count()
}

pub fn total_problems(logs: &[StudyLog]) -> u64 {
    logs.iter().map(|l| l.coding_problems as u64).sum()
}

/// Coding plus DSA hours.
pub fn total_coding_hours(logs: &[StudyLog]) -> f64 {
    logs.iter().map(|l| l.coding_hours + l.dsa_hours).sum()
}

/// Whether a day's log meets the GATE-hours and problem-count targets.
pub fn target_met(log: &StudyLog, targets: &DailyTargets) -> bool {
    log.gate_hours >= targets.gate_hours && log.coding_problems >= targets.coding_problems
}

pub fn coding_target_met(log: &StudyLog, targets: &DailyTargets) -> bool {
    log.coding_problems >= targets.coding_problems
}

/// Classify `date` for calendar display, relative to `today`.
pub fn day_status(
    logs: &[StudyLog],
    date: NaiveDate,
    today: NaiveDate,
    targets: &DailyTargets,
) -> DayStatus {
    match logs.iter().find(|l| l.is_on(date)) {
        Some(log) if log.coding_problems >= targets.coding_problems => DayStatus::Success,
        Some(log) if log.is_active() => DayStatus::Partial,
        Some(_) => DayStatus::Missed,
        None if date < today => DayStatus::Missed,
        None => DayStatus::Empty,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Status of every day of `year`-`month`. Empty for an invalid month.
pub fn month_calendar(
    logs: &[StudyLog],
    year: i32,
    month: u32,
    today: NaiveDate,
    targets: &DailyTargets,
) -> Vec<CalendarDay> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let mut days = Vec::with_capacity(31);
    let mut date = first;
    while date.month() == month {
        days.push(CalendarDay {
            date,
            status: day_status(logs, date, today, targets),
        });
        date = date + Duration::days(1);
    }
    days
}

/// Most recently saved non-empty coding profile link.
pub fn latest_profile(logs: &[StudyLog]) -> Option<&str> {
    logs.iter()
        .rev()
        .map(|l| l.hacker_rank_profile.trim())
        .find(|p| !p.is_empty())
}

/// Up to `n` logs, newest insertion first.
pub fn recent_logs(logs: &[StudyLog], n: usize) -> Vec<&StudyLog> {
    logs.iter().rev().take(n).collect()
}

/// Progress of one field toward its daily target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub label: &'static str,
    pub current: f64,
    pub target: f64,
    /// Percent of target reached, capped at 100.
    pub percent: f64,
    pub met: bool,
}

impl GoalProgress {
    fn new(label: &'static str, current: f64, target: f64) -> Self {
        let percent = if target > 0.0 {
            (current / target * 100.0).min(100.0)
        } else {
            100.0
        };
        GoalProgress {
            label,
            current,
            target,
            percent,
            met: current >= target,
        }
    }
}

/// Per-field breakdown of today's targets. A missing log counts as all zeros.
pub fn daily_goals(log: Option<&StudyLog>, targets: &DailyTargets) -> Vec<GoalProgress> {
    let value = |f: fn(&StudyLog) -> f64| log.map(f).unwrap_or(0.0);
    vec![
        GoalProgress::new("GATE Syllabus Prep", value(|l| l.gate_hours), targets.gate_hours),
        GoalProgress::new("Coding Practice", value(|l| l.coding_hours), targets.coding_hours),
        GoalProgress::new("DSA Concepts", value(|l| l.dsa_hours), targets.dsa_hours),
        GoalProgress::new("Aptitude", value(|l| l.revision_hours), targets.revision_hours),
        GoalProgress::new(
            "Coding Problems",
            value(|l| l.coding_problems as f64),
            targets.coding_problems as f64,
        ),
    ]
}
