use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::mock_tests::MockScoreStore;
use crate::progress::ProgressStore;
use crate::schedule::{self, ScheduleCache, ScheduleWeek};
use crate::storage::{JsonFileStorage, Storage};
use crate::tracker::ActivityLogStore;

/// Application state container.
/// Owns every store and is passed explicitly to whatever renders or mutates
/// them; there is no module-level state.
pub struct AppState {
    pub config: TrackerConfig,
    pub clock: Arc<dyn Clock>,
    /// Daily study logs
    pub logs: ActivityLogStore,
    /// Syllabus completion flags
    pub progress: ProgressStore,
    /// Mock exam attempts
    pub mock_scores: MockScoreStore,
    schedule_cache: ScheduleCache,
}

impl AppState {
    /// Open file-backed stores under the configured data directory, using
    /// the wall clock.
    pub fn open(config: TrackerConfig) -> Self {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    pub fn open_with_clock(config: TrackerConfig, clock: Arc<dyn Clock>) -> Self {
        let data_dir = config.resolved_data_dir();
        tracing::debug!(data_dir = ?data_dir, "Opening tracker data");
        let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(data_dir));
        Self::with_storage(config, storage, clock)
    }

    /// Build state over an arbitrary storage backend and clock.
    pub fn with_storage(config: TrackerConfig, storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        AppState {
            logs: ActivityLogStore::load(Arc::clone(&storage), Arc::clone(&clock)),
            progress: ProgressStore::load(Arc::clone(&storage)),
            mock_scores: MockScoreStore::load(storage),
            schedule_cache: ScheduleCache::default(),
            clock,
            config,
        }
    }

    /// Schedule for the configured plan start.
    pub fn schedule(&mut self) -> Arc<Vec<ScheduleWeek>> {
        self.schedule_cache.get(self.config.plan_start)
    }

    /// Schedule starting from an arbitrary date.
    pub fn schedule_from(&mut self, start: chrono::NaiveDate) -> Arc<Vec<ScheduleWeek>> {
        self.schedule_cache.get(start)
    }

    /// Week of the configured plan that today falls in.
    pub fn current_week(&mut self) -> Option<ScheduleWeek> {
        let schedule = self.schedule();
        schedule::current_week(&schedule, self.config.plan_start, self.clock.today()).cloned()
    }

    pub fn plan_started(&self) -> bool {
        self.clock.today() >= self.config.plan_start
    }
}
