use std::sync::Arc;

use crate::error::TrackerError;
use crate::mock_tests::model::MockTestResult;
use crate::storage::{self, Storage};

/// Storage key for the score series.
pub const MOCK_SCORES_KEY: &str = "gate_da_mock_scores";

/// Append-only mock exam results kept in ascending date order.
pub struct MockScoreStore {
    storage: Arc<dyn Storage>,
    scores: Vec<MockTestResult>,
}

impl MockScoreStore {
    /// Load the persisted series. The file may have been edited by hand, so
    /// ordering is re-established here rather than trusted.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let mut scores: Vec<MockTestResult> = storage::load_or_default(storage.as_ref(), MOCK_SCORES_KEY);
        sort_by_date(&mut scores);
        tracing::debug!(count = scores.len(), "Loaded mock scores");
        MockScoreStore { storage, scores }
    }

    /// Append `result`, re-sort by date (equal dates keep insertion order)
    /// and persist. Non-finite values are rejected before anything changes.
    pub fn add_mock_score(&mut self, result: MockTestResult) -> Result<(), TrackerError> {
        result.validate()?;
        tracing::debug!(
            date = %result.date,
            score = result.score,
            total_marks = result.total_marks,
            "Recording mock score"
        );
        self.scores.push(result);
        sort_by_date(&mut self.scores);
        storage::save(self.storage.as_ref(), MOCK_SCORES_KEY, &self.scores)
    }

    pub fn scores(&self) -> &[MockTestResult] {
        &self.scores
    }

    /// Score of the most recent attempt, 0 when none are recorded.
    pub fn latest_score(&self) -> f64 {
        self.scores.last().map(|r| r.score).unwrap_or(0.0)
    }

    pub fn best_score(&self) -> Option<&MockTestResult> {
        self.scores
            .iter()
            .max_by(|a, b| a.accuracy_percent().total_cmp(&b.accuracy_percent()))
    }

    /// Mean accuracy percentage over all attempts, 0 when empty.
    pub fn average_accuracy(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.scores.iter().map(MockTestResult::accuracy_percent).sum();
        sum / self.scores.len() as f64
    }
}

// Records with unparsable dates sort first.
fn sort_by_date(scores: &mut [MockTestResult]) {
    scores.sort_by_key(|r| r.day());
}
