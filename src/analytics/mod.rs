use serde::Serialize;

use crate::schedule::ScheduleWeek;
use crate::state::AppState;
use crate::tracker::stats::{self, GoalProgress};

/// Everything the overview screen shows, computed in one pass over the stores.
#[derive(Serialize, Debug, Clone)]
pub struct DashboardSummary {
    pub syllabus_progress: u8,
    pub total_hours: f64,
    pub latest_mock_score: f64,
    /// Days with any coding activity.
    pub streak: usize,
    pub logged_today: bool,
    /// GATE hours and problem targets both met today.
    pub today_target_met: bool,
    pub gate_goal_met: bool,
    /// Yesterday has no log and nothing has been logged today yet.
    pub missed_yesterday: bool,
    pub plan_started: bool,
    pub current_week: Option<ScheduleWeek>,
    pub total_weeks: usize,
    pub daily_goals: Vec<GoalProgress>,
}

pub fn compute_dashboard(state: &mut AppState) -> DashboardSummary {
    let targets = state.config.targets;
    let total_weeks = state.schedule().len();
    let current_week = state.current_week();

    let logs = &state.logs;
    let today_log = logs.today_log();

    DashboardSummary {
        syllabus_progress: state.progress.progress(),
        total_hours: stats::total_hours(logs.logs()),
        latest_mock_score: state.mock_scores.latest_score(),
        streak: stats::active_days(logs.logs()),
        logged_today: today_log.is_some(),
        today_target_met: today_log.map(|l| stats::target_met(l, &targets)).unwrap_or(false),
        gate_goal_met: today_log.map(|l| l.gate_hours >= targets.gate_hours).unwrap_or(false),
        missed_yesterday: logs.check_missed_day() && today_log.is_none(),
        plan_started: state.plan_started(),
        current_week,
        total_weeks,
        daily_goals: stats::daily_goals(today_log, &targets),
    }
}
