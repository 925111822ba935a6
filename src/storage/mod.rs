//! Synchronous key/value persistence for the stores.
//!
//! Every store owns one logical key and rewrites its whole collection on each
//! mutation. Backends only need get/set of a string payload.

pub mod file;
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TrackerError;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Durable get/set-by-key substrate.
pub trait Storage: Send + Sync {
    /// Fetch the raw payload for `key`, `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError>;

    /// Overwrite the payload for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), TrackerError>;
}

/// Load and decode the value under `key`.
///
/// Absent, unreadable or malformed payloads all yield `T::default()`; the
/// problem is logged and the store starts empty.
pub fn load_or_default<T>(storage: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key = key, "No stored data, using defaults");
            return T::default();
        }
        Err(e) => {
            tracing::warn!(key = key, error = %e, "Failed to read stored data, using defaults");
            return T::default();
        }
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                key = key,
                error = %e,
                "Discarding malformed stored data, using defaults"
            );
            T::default()
        }
    }
}

/// Encode `value` and write it under `key`.
pub fn save<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), TrackerError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| TrackerError::new(
            format!("Failed to serialize {}: {}", key, e),
            "json_serialize"
        ))?;
    storage.set(key, &json)
}
