use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::clock::{format_date, parse_date};
use crate::error::TrackerError;
use crate::tracker::model::deserialize_number;

/// One mock-exam attempt. Several attempts may share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockTestResult {
    #[serde(default)]
    pub date: String,
    // Scores can be negative under negative marking.
    #[serde(default, deserialize_with = "deserialize_number")]
    pub score: f64,
    #[serde(default, deserialize_with = "deserialize_number")]
    pub total_marks: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub accuracy: Option<f64>,
}

impl MockTestResult {
    pub fn new(date: NaiveDate, score: f64, total_marks: f64) -> Self {
        MockTestResult {
            date: format_date(date),
            score,
            total_marks,
            accuracy: None,
        }
    }

    /// JSON has no encoding for non-finite numbers, so they are rejected
    /// before a record is stored.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let fields = [
            ("score", Some(self.score)),
            ("total marks", Some(self.total_marks)),
            ("accuracy", self.accuracy),
        ];
        for (name, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_finite()) {
                return Err(TrackerError::input(format!(
                    "Mock test {} must be a finite number, got {}",
                    name, value
                ))
                .with_context(format!("date: {}", self.date)));
            }
        }
        Ok(())
    }

    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date).ok()
    }

    /// Recorded accuracy, or score as a percentage of total marks.
    pub fn accuracy_percent(&self) -> f64 {
        match self.accuracy {
            Some(accuracy) => accuracy,
            None if self.total_marks > 0.0 => self.score / self.total_marks * 100.0,
            None => 0.0,
        }
    }
}

fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Number(#[serde(deserialize_with = "deserialize_number")] f64);

    Ok(Option::<Number>::deserialize(deserializer)?.map(|n| n.0))
}
