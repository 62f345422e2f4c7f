//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "store": { "backend": "file" },
//!   "display": { "timeFormat": "%Y-%m-%d %H:%M", "utcOffsetMinutes": 0 },
//!   "log": { "level": "warn" },
//!   "requestTimeoutMs": 5000
//! }
//! ```
//! Keys Postline does not manage are preserved when saving.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::presenters::DEFAULT_TIME_FORMAT;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Where entities are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process memory; nothing survives exit
    Memory,
    /// JSON documents in the data directory
    #[default]
    File,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            other => anyhow::bail!("Unknown store backend: {} (expected memory or file)", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    store: StoreSettings,
    #[serde(default)]
    display: DisplaySettings,
    #[serde(default)]
    log: LogSettings,
    #[serde(default)]
    request_timeout_ms: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreSettings {
    #[serde(default)]
    backend: StoreBackend,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplaySettings {
    #[serde(default)]
    time_format: Option<String>,
    #[serde(default)]
    utc_offset_minutes: i32,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogSettings {
    #[serde(default)]
    level: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Postline configuration (simplified view of settings)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreBackend,
    pub time_format: String,
    pub utc_offset_minutes: i32,
    /// Tracing filter directive used when POSTLINE_LOG is unset
    pub log_level: String,
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreBackend::File,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            utc_offset_minutes: 0,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or malformed settings file yields defaults. The store
    /// backend can be overridden with POSTLINE_STORE (for CI/testing).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw: SettingsFile = match read_settings(data_dir)? {
            None => SettingsFile::default(),
            Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %settings_path(data_dir).display(), error = %e, "Malformed settings, using defaults");
                SettingsFile::default()
            }),
        };

        let store = match std::env::var("POSTLINE_STORE").ok() {
            Some(value) => value.parse()?,
            None => raw.store.backend,
        };

        let defaults = Self::default();
        Ok(Self {
            store,
            time_format: raw.display.time_format.unwrap_or(defaults.time_format),
            utc_offset_minutes: raw.display.utc_offset_minutes,
            log_level: raw.log.level.unwrap_or(defaults.log_level),
            request_timeout_ms: raw.request_timeout_ms.unwrap_or(defaults.request_timeout_ms),
        })
    }

    /// Save config to the data directory
    /// Preserves other settings that Postline doesn't manage
    ///
    /// A settings file that does not parse is left untouched and reported
    /// as an error.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let path = settings_path(data_dir);
        let mut settings: SettingsFile = match read_settings(data_dir)? {
            None => SettingsFile::default(),
            Some(content) => serde_json::from_str(&content).with_context(|| {
                format!("Not overwriting {}: fix or remove the malformed file first", path.display())
            })?,
        };

        settings.store.backend = self.store;
        settings.display.time_format = Some(self.time_format.clone());
        settings.display.utc_offset_minutes = self.utc_offset_minutes;
        settings.log.level = Some(self.log_level.clone());
        settings.request_timeout_ms = Some(self.request_timeout_ms);

        std::fs::create_dir_all(data_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.json")
}

/// Raw settings text, `None` when the file does not exist yet
fn read_settings(data_dir: &Path) -> Result<Option<String>> {
    let path = settings_path(data_dir);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}
