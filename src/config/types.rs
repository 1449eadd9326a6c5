use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::CatalogSource;
use crate::favorites::FileStorage;

pub const DEFAULT_CATALOG_URL: &str = "https://api.github.com/emojis";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    /// Log file path. Defaults to `<data dir>/favmoji/favmoji.log`.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Bundled,
    File,
    Remote,
}

/// Where the catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogKind,
    /// JSON file for `source = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Endpoint for `source = "remote"`.
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Fetch timeout in seconds (default: 10).
    #[serde(default = "default_fetch_timeout")]
    pub timeout_seconds: u32,
}

/// Input debounce and list transition timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Quiet period before a search runs (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Delay before search results replace the list (default: 300).
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Favorites storage file. Defaults to `<data dir>/favmoji/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_fetch_timeout() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_transition_ms() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: CatalogKind::default(),
            path: None,
            url: default_catalog_url(),
            timeout_seconds: default_fetch_timeout(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl CatalogConfig {
    /// Resolve into a source. Call after [`Config::validate`].
    pub fn to_source(&self) -> CatalogSource {
        match (self.source, &self.path) {
            (CatalogKind::File, Some(path)) => CatalogSource::File(path.clone()),
            (CatalogKind::Remote, _) => CatalogSource::Remote {
                url: self.url.clone(),
                timeout: Duration::from_secs(u64::from(self.timeout_seconds)),
            },
            _ => CatalogSource::Bundled,
        }
    }
}

impl TimingConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl StorageConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(FileStorage::default_path)
    }
}

impl Config {
    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("favmoji").join("favmoji.log")
        })
    }
}
