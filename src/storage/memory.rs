use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::error::TrackerError;
use super::Storage;

/// In-process storage. Clones share the same map, so a test can keep a handle
/// and inspect what a store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload, bypassing serialization (e.g. legacy or corrupt data).
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TrackerError> {
        self.insert_raw(key, value);
        Ok(())
    }
}
