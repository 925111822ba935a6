use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::clock::{format_date, parse_date};

/// One day of study activity. `date` (`YYYY-MM-DD`) is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyLog {
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub gate_hours: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub coding_hours: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub dsa_hours: f64,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub revision_hours: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub coding_problems: u32,
    #[serde(default)]
    pub coding_topics: String,
    #[serde(default)]
    pub gate_topics: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub hacker_rank_profile: String,
    /// Legacy single topic field from before `coding_topics` existed.
    #[serde(default)]
    pub dsa_topic: String,
    /// Legacy lump-sum hours; not counted by any aggregate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_hours: Option<f64>,
}

impl StudyLog {
    /// Empty log for `date`.
    pub fn new(date: NaiveDate) -> Self {
        StudyLog {
            date: format_date(date),
            gate_hours: 0.0,
            coding_hours: 0.0,
            dsa_hours: 0.0,
            revision_hours: 0.0,
            coding_problems: 0,
            coding_topics: String::new(),
            gate_topics: String::new(),
            notes: String::new(),
            hacker_rank_profile: String::new(),
            dsa_topic: String::new(),
            study_hours: None,
        }
    }

    /// Parsed `date`, `None` for records with a malformed key.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(&self.date).ok()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.day() == Some(date)
    }

    /// Sum of the four tracked hour fields.
    pub fn total_hours(&self) -> f64 {
        self.gate_hours + self.coding_hours + self.dsa_hours + self.revision_hours
    }

    /// Any coding activity at all.
    pub fn is_active(&self) -> bool {
        self.coding_problems > 0 || self.coding_hours > 0.0
    }
}

/// Calendar classification of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Success,
    Partial,
    Missed,
    Empty,
}

/// Per-field daily thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyTargets {
    pub gate_hours: f64,
    pub coding_hours: f64,
    pub dsa_hours: f64,
    pub revision_hours: f64,
    pub coding_problems: u32,
}

impl DailyTargets {
    pub fn total_hours(&self) -> f64 {
        self.gate_hours + self.coding_hours + self.dsa_hours + self.revision_hours
    }
}

impl Default for DailyTargets {
    fn default() -> Self {
        DailyTargets {
            gate_hours: 2.0,
            coding_hours: 1.0,
            dsa_hours: 1.0,
            revision_hours: 1.0,
            coding_problems: 2,
        }
    }
}

// Older records store numbers as strings, null, or omit them entirely.
// Anything that isn't a usable non-negative number becomes 0.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_number(deserializer)?;
    Ok(value.max(0.0))
}

/// Tolerant number decoding shared by the persisted records: numbers,
/// numeric strings, null and booleans are accepted, and anything that is
/// not a finite number becomes 0. Sign is preserved.
pub(crate) fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number, numeric string, or null")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.trim().parse::<f64>().unwrap_or(0.0))
        }

        fn visit_bool<E: de::Error>(self, _value: bool) -> Result<Self::Value, E> {
            Ok(0.0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(0.0)
        }
    }

    let value = deserializer.deserialize_any(AmountVisitor)?;
    Ok(if value.is_finite() { value } else { 0.0 })
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_amount(deserializer)?;
    Ok(value.min(u32::MAX as f64) as u32)
}
