//! Static reference data: the topic catalog and the weekly plan template.

pub mod catalog;
pub mod plan;

use std::collections::HashMap;
use lazy_static::lazy_static;

pub use catalog::{Subject, CATALOG};
pub use plan::{PlanEntry, PLAN_TEMPLATE};

lazy_static! {
    /// Total number of subtopics across the catalog.
    pub static ref TOTAL_SUBTOPICS: usize = CATALOG.iter().map(|s| s.subtopics.len()).sum();

    static ref SUBJECTS_BY_ID: HashMap<&'static str, &'static Subject> =
        CATALOG.iter().map(|s| (s.id, s)).collect();
}

/// Look up a subject by its id (e.g. `"calculus"`).
pub fn subject(id: &str) -> Option<&'static Subject> {
    SUBJECTS_BY_ID.get(id).copied()
}

/// Whether `(subject_id, index)` names a real subtopic.
pub fn contains(subject_id: &str, index: usize) -> bool {
    subject(subject_id).and_then(|s| s.subtopic(index)).is_some()
}

pub fn total_subtopics() -> usize {
    *TOTAL_SUBTOPICS
}
