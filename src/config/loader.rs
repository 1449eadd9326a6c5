use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{CatalogKind, Config};

/// Upper bound for debounce and transition delays, in milliseconds.
const MAX_DELAY_MS: u64 = 5_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/favmoji/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("favmoji").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `source = "file"` has a path
    /// - `source = "remote"` has a non-empty URL and a non-zero timeout
    /// - debounce and transition delays are within 1..=5000 ms
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.catalog.source {
            CatalogKind::File if self.catalog.path.is_none() => {
                return Err(ConfigError::ValidationError {
                    message: "catalog.source = \"file\" requires catalog.path".to_string(),
                });
            }
            CatalogKind::Remote if self.catalog.url.trim().is_empty() => {
                return Err(ConfigError::ValidationError {
                    message: "catalog.source = \"remote\" requires catalog.url".to_string(),
                });
            }
            CatalogKind::Remote if self.catalog.timeout_seconds == 0 => {
                return Err(ConfigError::ValidationError {
                    message: "catalog.timeout_seconds must be greater than 0".to_string(),
                });
            }
            _ => {}
        }

        for (name, value) in [
            ("timing.debounce_ms", self.timing.debounce_ms),
            ("timing.transition_ms", self.timing.transition_ms),
        ] {
            if value == 0 || value > MAX_DELAY_MS {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "{} must be between 1 and {} (got {})",
                        name, MAX_DELAY_MS, value
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "invalid { toml }").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn zero_debounce_fails_validation() {
        let mut config = Config::default();
        config.timing.debounce_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
