pub mod store;

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

pub use store::{ProgressStore, PROGRESS_KEY};

/// Positional address of a subtopic: `(subject_id, subtopic_index)`.
/// Serialized as `"{subject_id}-{subtopic_index}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtopicKey {
    pub subject_id: String,
    pub index: usize,
}

impl SubtopicKey {
    pub fn new<S: Into<String>>(subject_id: S, index: usize) -> Self {
        SubtopicKey {
            subject_id: subject_id.into(),
            index,
        }
    }
}

impl fmt::Display for SubtopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.subject_id, self.index)
    }
}

impl FromStr for SubtopicKey {
    type Err = TrackerError;

    // Subject ids contain hyphens, so the index is after the last one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (subject_id, index) = s
            .rsplit_once('-')
            .ok_or_else(|| TrackerError::input(format!("Malformed subtopic key: {:?}", s)))?;
        if subject_id.is_empty() {
            return Err(TrackerError::input(format!("Malformed subtopic key: {:?}", s)));
        }
        let index = index
            .parse::<usize>()
            .map_err(|e| TrackerError::input(format!("Malformed subtopic index in {:?}: {}", s, e)))?;
        Ok(SubtopicKey::new(subject_id, index))
    }
}
