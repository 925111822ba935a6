use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table};

use crate::analytics::compute_dashboard;
use crate::clock::format_date;
use crate::mock_tests::MockTestResult;
use crate::schedule::ScheduleWeek;
use crate::state::AppState;
use crate::syllabus::CATALOG;
use crate::tracker::stats;
use crate::tracker::{DayStatus, StudyLog};

use super::LogArgs;

pub fn schedule(state: &mut AppState, start: Option<NaiveDate>, current: bool) -> Result<()> {
    if current {
        match state.current_week() {
            Some(week) => {
                let total = state.schedule().len();
                if !state.plan_started() {
                    println!("Starting soon");
                }
                print_week(&week, total);
            }
            None => println!("The plan is empty."),
        }
        return Ok(());
    }

    let weeks = match start {
        Some(day) => state.schedule_from(day),
        None => state.schedule(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Week", "Dates", "Subject", "Focus"]);
    for week in weeks.iter() {
        table.add_row(vec![
            Cell::new(week.week_number),
            Cell::new(format!("{} - {}", week.start_date, week.end_date)),
            Cell::new(&week.subject),
            Cell::new(week.focus_topics.join("\n")),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_week(week: &ScheduleWeek, total: usize) {
    println!(
        "Week {} / {}: {} ({} - {})",
        week.week_number, total, week.subject, week.start_date, week.end_date
    );
    for topic in &week.focus_topics {
        println!("  - {topic}");
    }
}

pub fn log(state: &mut AppState, args: LogArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| state.clock.today());

    // Start from what is already saved for the day so a partial update
    // doesn't wipe other fields; the store still replaces the whole record.
    let mut entry = state
        .logs
        .log_for(date)
        .cloned()
        .unwrap_or_else(|| StudyLog::new(date));

    if let Some(v) = args.gate_hours {
        entry.gate_hours = non_negative("gate-hours", v)?;
    }
    if let Some(v) = args.coding_hours {
        entry.coding_hours = non_negative("coding-hours", v)?;
    }
    if let Some(v) = args.dsa_hours {
        entry.dsa_hours = non_negative("dsa-hours", v)?;
    }
    if let Some(v) = args.revision_hours {
        entry.revision_hours = non_negative("revision-hours", v)?;
    }
    if let Some(v) = args.problems {
        entry.coding_problems = v;
    }
    if let Some(v) = args.gate_topics {
        entry.gate_topics = v;
    }
    if let Some(v) = args.coding_topics {
        entry.coding_topics = v;
    }
    if let Some(v) = args.dsa_topic {
        entry.dsa_topic = v;
    }
    if let Some(v) = args.notes {
        entry.notes = v;
    }
    if let Some(v) = args.profile {
        entry.hacker_rank_profile = v;
    }

    let total = entry.total_hours();
    let target_met = stats::target_met(&entry, &state.config.targets);
    state.logs.add_log(entry)?;

    println!(
        "Saved log for {}: {}/{} hours",
        format_date(date),
        total,
        state.config.targets.total_hours()
    );
    if target_met {
        println!("Daily target met!");
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(anyhow!("--{field} must be a non-negative number, got {value}"))
    }
}

pub fn today(state: &AppState) -> Result<()> {
    let targets = state.config.targets;
    let log = state.logs.today_log();

    match log {
        Some(log) => println!("Today ({}): {} hours logged", log.date, log.total_hours()),
        None => println!("No log for today yet."),
    }
    if state.logs.check_missed_day() && log.is_none() {
        println!("You missed logging yesterday. Get back on track today!");
    }

    let mut table = Table::new();
    table.set_header(vec!["Goal", "Current", "Target", "Progress"]);
    for goal in stats::daily_goals(log, &targets) {
        table.add_row(vec![
            Cell::new(goal.label),
            Cell::new(goal.current),
            Cell::new(goal.target),
            Cell::new(if goal.met {
                "done".to_string()
            } else {
                format!("{:.0}%", goal.percent)
            }),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn missed(state: &AppState) -> Result<()> {
    if state.logs.check_missed_day() {
        println!("Missed yesterday: yes");
    } else {
        println!("Missed yesterday: no");
    }
    Ok(())
}

pub fn calendar(state: &AppState, month: Option<&str>) -> Result<()> {
    let today = state.clock.today();
    let (year, month) = match month {
        Some(m) => parse_month(m)?,
        None => (today.year(), today.month()),
    };

    let days = stats::month_calendar(state.logs.logs(), year, month, today, &state.config.targets);
    let mut table = Table::new();
    table.set_header(vec!["Date", "Status"]);
    for day in &days {
        table.add_row(vec![Cell::new(format_date(day.date)), Cell::new(status_label(day.status))]);
    }
    println!("{table}");
    Ok(())
}

fn parse_month(s: &str) -> Result<(i32, u32)> {
    let parsed = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|e| anyhow!("invalid month {s:?} (expected YYYY-MM): {e}"))?;
    Ok((parsed.year(), parsed.month()))
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Success => "success",
        DayStatus::Partial => "partial",
        DayStatus::Missed => "missed",
        DayStatus::Empty => "",
    }
}

pub fn syllabus(state: &AppState) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Subject", "#", "Subtopic", "Done"]);
    for subject in CATALOG {
        for (index, name) in subject.subtopics.iter().enumerate() {
            let done = state.progress.is_topic_completed(subject.id, index);
            table.add_row(vec![
                Cell::new(subject.id),
                Cell::new(index),
                Cell::new(name),
                Cell::new(if done { "x" } else { "" }),
            ]);
        }
    }
    println!("{table}");
    let unknown = state.progress.unknown_keys();
    if !unknown.is_empty() {
        println!("Ignoring {} saved flag(s) not in the syllabus: {}", unknown.len(), unknown.join(", "));
    }
    println!("Syllabus progress: {}%", state.progress.progress());
    Ok(())
}

pub fn toggle(state: &mut AppState, subject: &str, index: usize) -> Result<()> {
    let completed = state.progress.toggle_topic(subject, index)?;
    let name = crate::syllabus::subject(subject)
        .and_then(|s| s.subtopic(index))
        .unwrap_or_default();
    println!(
        "{subject} #{index} {name}: {}",
        if completed { "completed" } else { "not completed" }
    );
    println!("Syllabus progress: {}%", state.progress.progress());
    Ok(())
}

pub fn mock_add(state: &mut AppState, score: f64, total: f64, date: Option<NaiveDate>) -> Result<()> {
    if !score.is_finite() {
        return Err(anyhow!("--score must be a finite number, got {score}"));
    }
    if !(total.is_finite() && total > 0.0) {
        return Err(anyhow!("--total must be a finite number greater than zero, got {total}"));
    }
    let date = date.unwrap_or_else(|| state.clock.today());
    let result = MockTestResult::new(date, score, total);
    let accuracy = result.accuracy_percent();
    state.mock_scores.add_mock_score(result)?;
    println!("Recorded {score}/{total} ({accuracy:.1}%) on {}", format_date(date));
    Ok(())
}

pub fn mock_list(state: &AppState) -> Result<()> {
    let scores = state.mock_scores.scores();
    if scores.is_empty() {
        println!("No mock tests recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Score", "Total", "Accuracy"]);
    for result in scores {
        table.add_row(vec![
            Cell::new(&result.date),
            Cell::new(result.score),
            Cell::new(result.total_marks),
            Cell::new(format!("{:.1}%", result.accuracy_percent())),
        ]);
    }
    println!("{table}");
    println!(
        "Latest score: {} | Average accuracy: {:.1}%",
        state.mock_scores.latest_score(),
        state.mock_scores.average_accuracy()
    );
    Ok(())
}

pub fn dashboard(state: &mut AppState, json: bool) -> Result<()> {
    let summary = compute_dashboard(state);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if let Some(week) = &summary.current_week {
        if !summary.plan_started {
            println!("Starting soon");
        }
        print_week(week, summary.total_weeks);
    }
    if summary.missed_yesterday {
        println!("You missed logging yesterday. Get back on track today!");
    }
    if summary.gate_goal_met {
        println!("GATE goal reached today!");
    }

    println!("Syllabus covered: {}%", summary.syllabus_progress);
    println!("Total hours: {}h", summary.total_hours);
    println!("Mock score: {}", summary.latest_mock_score);
    println!("Streak: {} days", summary.streak);
    println!(
        "Today's target: {}",
        if summary.today_target_met { "met" } else { "pending" }
    );
    Ok(())
}

pub fn coding(state: &AppState) -> Result<()> {
    let logs = state.logs.logs();
    let targets = &state.config.targets;
    let today_log = state.logs.today_log();
    let solved_today = today_log.map(|l| l.coding_problems).unwrap_or(0);

    println!("Today: {solved_today} / {} problems", targets.coding_problems);
    if today_log.is_some_and(|l| stats::coding_target_met(l, targets)) {
        println!("Coding target met!");
    }
    println!("Total problems: {}", stats::total_problems(logs));
    println!("Coding hours: {}", stats::total_coding_hours(logs));
    println!("Active days: {}", stats::active_days(logs));
    if let Some(profile) = stats::latest_profile(logs) {
        println!("Profile: {profile}");
    }

    let recent = stats::recent_logs(logs, 6);
    if !recent.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Date", "Problems", "Topics"]);
        for log in recent {
            table.add_row(vec![
                Cell::new(&log.date),
                Cell::new(log.coding_problems),
                Cell::new(&log.coding_topics),
            ]);
        }
        println!("{table}");
    }
    Ok(())
}
