use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::{format_date, Clock};
use crate::error::TrackerError;
use crate::storage::{self, Storage};
use crate::tracker::model::StudyLog;

/// Storage key for the log collection.
pub const LOGS_KEY: &str = "gate_da_logs";

/// Daily activity logs, at most one per calendar date.
pub struct ActivityLogStore {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
    logs: Vec<StudyLog>,
}

impl ActivityLogStore {
    /// Load the persisted collection; malformed data starts an empty store.
    pub fn load(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        let logs: Vec<StudyLog> = storage::load_or_default(storage.as_ref(), LOGS_KEY);
        tracing::debug!(count = logs.len(), "Loaded study logs");
        ActivityLogStore { storage, clock, logs }
    }

    /// Insert `log`, replacing any existing log for the same date, and persist.
    ///
    /// A replaced date moves to the end of the collection. If persisting fails
    /// the in-memory collection still holds the new log.
    pub fn add_log(&mut self, log: StudyLog) -> Result<(), TrackerError> {
        let replaced = self.logs.iter().any(|l| l.date == log.date);
        self.logs.retain(|l| l.date != log.date);
        tracing::debug!(
            date = %log.date,
            replaced = replaced,
            coding_problems = log.coding_problems,
            "Saving study log"
        );
        self.logs.push(log);
        storage::save(self.storage.as_ref(), LOGS_KEY, &self.logs)
    }

    /// Today's log according to the injected clock.
    pub fn today_log(&self) -> Option<&StudyLog> {
        let today = format_date(self.clock.today());
        self.logs.iter().find(|l| l.date == today)
    }

    /// True iff nothing was logged for yesterday. Older gaps are not considered.
    pub fn check_missed_day(&self) -> bool {
        let yesterday = self.clock.yesterday();
        !self.logs.iter().any(|l| l.is_on(yesterday))
    }

    pub fn log_for(&self, date: NaiveDate) -> Option<&StudyLog> {
        self.logs.iter().find(|l| l.is_on(date))
    }

    /// All logs in insertion order.
    pub fn logs(&self) -> &[StudyLog] {
        &self.logs
    }
}
