use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::tracker::DailyTargets;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "GATETRACK_DATA_DIR";

const APP_DIR: &str = "com.gatetrack";
const CONFIG_FILE: &str = "gatetrack.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where the store files live. Defaults to the platform app-data dir.
    pub data_dir: Option<PathBuf>,
    /// Day the study plan began; week 1 is the Monday on or before it.
    pub plan_start: NaiveDate,
    pub targets: DailyTargets,
    /// Emit logs as JSON lines instead of the compact text format.
    pub json_logs: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            data_dir: None,
            plan_start: default_plan_start(),
            targets: DailyTargets::default(),
            json_logs: false,
        }
    }
}

impl TrackerConfig {
    /// Resolved data directory: explicit setting, then env override, then
    /// the platform default.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            return PathBuf::from(dir);
        }
        app_data_dir().join("data")
    }
}

fn default_plan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 19).unwrap_or(NaiveDate::MIN)
}

/// Platform-specific application directory.
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support");
            dir.push(APP_DIR);
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push(APP_DIR);
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share");
            dir.push(APP_DIR);
            return dir;
        }
    }

    // Fallback
    PathBuf::from(".gatetrack")
}

pub fn default_config_path() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Parse a config file. Fails if the file is missing or invalid.
pub fn load_config(path: &Path) -> Result<TrackerConfig, TrackerError> {
    let content = fs::read_to_string(path)
        .map_err(|e| TrackerError::new(
            format!("Failed to read config: {}", e),
            "config"
        ).with_context(format!("path: {:?}", path)))?;

    toml::from_str::<TrackerConfig>(&content)
        .map_err(|e| TrackerError::from(e).with_context(format!("path: {:?}", path)))
}

/// Load the config at `path`, falling back to defaults if it is absent or
/// unreadable.
pub fn load_or_default(path: &Path) -> TrackerConfig {
    if !path.exists() {
        tracing::debug!(path = ?path, "No config file, using defaults");
        return TrackerConfig::default();
    }

    match load_config(path) {
        Ok(config) => {
            tracing::debug!(path = ?path, "Loaded tracker config");
            config
        }
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "Failed to load config, using defaults");
            TrackerConfig::default()
        }
    }
}
