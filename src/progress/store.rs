use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::TrackerError;
use crate::progress::SubtopicKey;
use crate::storage::{self, Storage};
use crate::syllabus::{self, Subject, CATALOG};

/// Storage key for the completion map.
pub const PROGRESS_KEY: &str = "gate_da_syllabus_progress";

/// Per-subtopic completion flags for the syllabus catalog.
pub struct ProgressStore {
    storage: Arc<dyn Storage>,
    completed: BTreeMap<String, bool>,
}

impl ProgressStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let completed: BTreeMap<String, bool> = storage::load_or_default(storage.as_ref(), PROGRESS_KEY);
        let store = ProgressStore { storage, completed };
        let unknown = store.unknown_keys().len();
        if unknown > 0 {
            tracing::warn!(unknown, "Ignoring progress flags that match no catalog subtopic");
        }
        tracing::debug!(entries = store.completed.len(), "Loaded syllabus progress");
        store
    }

    /// Stored keys that are malformed or address no catalog subtopic. They
    /// are kept on disk but never counted.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.completed
            .keys()
            .filter(|raw| {
                !raw.parse::<SubtopicKey>()
                    .map(|key| syllabus::contains(&key.subject_id, key.index))
                    .unwrap_or(false)
            })
            .map(String::as_str)
            .collect()
    }

    /// Flip the completion flag for a subtopic and persist the whole map.
    /// Returns the new state.
    pub fn toggle_topic(&mut self, subject_id: &str, index: usize) -> Result<bool, TrackerError> {
        if !syllabus::contains(subject_id, index) {
            return Err(TrackerError::input(format!(
                "Unknown subtopic {} of subject {:?}",
                index, subject_id
            )));
        }

        let key = SubtopicKey::new(subject_id, index).to_string();
        let now_completed = !self.completed.get(&key).copied().unwrap_or(false);
        self.completed.insert(key, now_completed);
        tracing::debug!(
            subject = subject_id,
            index = index,
            completed = now_completed,
            "Toggled subtopic"
        );

        storage::save(self.storage.as_ref(), PROGRESS_KEY, &self.completed)?;
        Ok(now_completed)
    }

    /// Unknown subjects and out-of-range indices read as not completed.
    pub fn is_topic_completed(&self, subject_id: &str, index: usize) -> bool {
        syllabus::contains(subject_id, index)
            && self.flag(&SubtopicKey::new(subject_id, index))
    }

    /// Percent of catalog subtopics completed, rounded, 0 for an empty catalog.
    pub fn progress(&self) -> u8 {
        percent_of(self.completed_in(CATALOG), syllabus::total_subtopics())
    }

    /// Completion percent for one subject, `None` if the subject is unknown.
    pub fn subject_progress(&self, subject_id: &str) -> Option<u8> {
        let subject = syllabus::subject(subject_id)?;
        let done = self.completed_in(std::slice::from_ref(subject));
        Some(percent_of(done, subject.subtopics.len()))
    }

    fn completed_in(&self, subjects: &[Subject]) -> usize {
        subjects
            .iter()
            .flat_map(|s| (0..s.subtopics.len()).map(move |i| SubtopicKey::new(s.id, i)))
            .filter(|key| self.flag(key))
            .count()
    }

    fn flag(&self, key: &SubtopicKey) -> bool {
        self.completed.get(&key.to_string()).copied().unwrap_or(false)
    }
}

fn percent_of(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round().min(100.0) as u8
}
