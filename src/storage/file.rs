use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::TrackerError;
use super::Storage;

/// One JSON file per key under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        JsonFileStorage { root: root.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::new(
                format!("Failed to read {}: {}", key, e),
                "io"
            ).with_context(format!("path: {:?}", path))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TrackerError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| TrackerError::new(
                format!("Failed to create directory: {}", e),
                "io"
            ).with_context(format!("path: {:?}", self.root)))?;

        let path = self.path_for(key);
        // Write to a sibling temp file and rename so readers never see half a file.
        let temp_path = path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.write_all(b"\n")?;
            file.sync_all()?;
            drop(file);
            fs::rename(&temp_path, &path)
        };
        if let Err(e) = write() {
            let _ = fs::remove_file(&temp_path);
            return Err(TrackerError::new(
                format!("Failed to write {}: {}", key, e),
                "io"
            ).with_context(format!("path: {:?}", path)));
        }

        tracing::debug!(key = key, path = ?path, bytes = value.len(), "Persisted");
        Ok(())
    }
}
