//! TOML-based application configuration.
//!
//! Holds the active locale and the analytics endpoint/opt-out. Stored at
//! `~/.config/yearsketch/config.toml`; a missing file yields the defaults.
//! Answer data never touches disk.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::i18n::Locale;

/// Default collection endpoint.
const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzy7gO4oOa6p5PeHdYD3vaH-PXHFSBKMk78ME8KJrxw8peQkVmVPdUCfq9CzS0uVtuQQg/exec";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

fn default_true() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// `~/.config/yearsketch/config.toml` (platform equivalent).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yearsketch").join("config.toml"))
}

impl AppConfig {
    /// Load from the default location; defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path().ok_or_else(|| ConfigError::SaveFailed {
            path: PathBuf::from("<config dir>"),
            message: "no config directory on this platform".to_string(),
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| save_err(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| save_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.locale, Locale::Zh);
        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig {
            locale: Locale::En,
            analytics: AnalyticsConfig {
                enabled: false,
                endpoint: "https://example.com/collect".into(),
            },
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.locale, Locale::En);
        assert!(!loaded.analytics.enabled);
        assert_eq!(loaded.analytics.endpoint, "https://example.com/collect");
    }

    #[test]
    fn partial_file_fills_in_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "locale = \"en\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert!(config.analytics.enabled);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "locale = [broken").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
