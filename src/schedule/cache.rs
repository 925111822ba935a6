use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::NaiveDate;
use lru::LruCache;

use super::{generate_schedule, week_anchor, ScheduleWeek};

/// Memoizes generated schedules keyed by the normalized Monday anchor.
/// Any two start dates in the same week share one entry.
pub struct ScheduleCache {
    entries: LruCache<NaiveDate, Arc<Vec<ScheduleWeek>>>,
}

impl ScheduleCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        ScheduleCache {
            entries: LruCache::new(capacity),
        }
    }

    /// Fetch the schedule for `start_date`, generating it on a miss.
    pub fn get(&mut self, start_date: NaiveDate) -> Arc<Vec<ScheduleWeek>> {
        let anchor = week_anchor(start_date);
        if let Some(hit) = self.entries.get(&anchor) {
            tracing::debug!(anchor = %anchor, "Schedule cache hit");
            return Arc::clone(hit);
        }

        tracing::debug!(anchor = %anchor, "Schedule cache miss");
        let schedule = Arc::new(generate_schedule(anchor));
        self.entries.put(anchor, Arc::clone(&schedule));
        schedule
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScheduleCache {
    fn default() -> Self {
        Self::new(8)
    }
}
