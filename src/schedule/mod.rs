//! Weekly study schedule generated from the plan template.

pub mod cache;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::syllabus::{PlanEntry, PLAN_TEMPLATE};

pub use cache::ScheduleCache;

/// Appended to every week's focus topics.
pub const MOCK_TEST_MARKER: &str = "Sunday: 3hr Full Mock Test";

/// Display format for week boundaries, e.g. "Feb 16".
const WEEK_DATE_FORMAT: &str = "%b %-d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWeek {
    pub week_number: u32,
    pub subject: String,
    pub focus_topics: Vec<String>,
    pub start_date: String,
    pub end_date: String,
}

/// Monday of the week containing `date`.
pub fn week_anchor(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Lay the plan template onto calendar weeks starting at the Monday on or
/// before `start_date`.
pub fn generate_schedule(start_date: NaiveDate) -> Vec<ScheduleWeek> {
    generate_from(PLAN_TEMPLATE, start_date)
}

/// Same as [`generate_schedule`] over an arbitrary template.
pub fn generate_from(template: &[PlanEntry], start_date: NaiveDate) -> Vec<ScheduleWeek> {
    let mut week_start = week_anchor(start_date);
    let mut weeks = Vec::with_capacity(template.len());

    for (i, entry) in template.iter().enumerate() {
        let week_end = week_start + Duration::days(7);

        let mut focus_topics: Vec<String> = entry.topics.iter().map(|t| t.to_string()).collect();
        focus_topics.push(MOCK_TEST_MARKER.to_string());

        weeks.push(ScheduleWeek {
            week_number: (i + 1) as u32,
            subject: entry.subject.to_string(),
            focus_topics,
            start_date: week_start.format(WEEK_DATE_FORMAT).to_string(),
            end_date: week_end.format(WEEK_DATE_FORMAT).to_string(),
        });

        week_start = week_end;
    }

    weeks
}

/// The week a user should be on at `today` for a plan that began at
/// `plan_start`. Before the start this is week 1; past the end it stays on
/// the final week.
pub fn current_week<'a>(
    schedule: &'a [ScheduleWeek],
    plan_start: NaiveDate,
    today: NaiveDate,
) -> Option<&'a ScheduleWeek> {
    if today < plan_start {
        return schedule.first();
    }
    let elapsed_days = (today - plan_start).num_days();
    let index = (elapsed_days / 7) as usize;
    schedule.get(index).or_else(|| schedule.last())
}
