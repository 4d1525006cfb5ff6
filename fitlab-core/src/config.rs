//! TOML configuration with environment overrides.
//!
//! Lookup order for the file: `FITLAB_CONFIG`, then
//! `<config_dir>/fitlab/config.toml`. A missing file means defaults; a file
//! that exists but does not parse is an error. `FITLAB_API_KEY` always wins
//! over the file's key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_ENV: &str = "FITLAB_CONFIG";
pub const API_KEY_ENV: &str = "FITLAB_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where and how to reach the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub path: String,
    /// Value for the `X-RapidAPI-Host` header.
    pub host: String,
    pub api_key: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://exercisedb.p.rapidapi.com".into(),
            path: "/exercises".into(),
            host: "exercisedb.p.rapidapi.com".into(),
            api_key: String::new(),
            timeout_secs: None,
        }
    }
}

/// Choices offered by the muscle and type selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub muscles: Vec<String>,
    pub types: Vec<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        let muscles = [
            "abdominals", "abductors", "adductors", "biceps", "calves", "chest",
            "forearms", "glutes", "hamstrings", "lats", "lower_back", "middle_back",
            "neck", "quadriceps", "traps", "triceps",
        ];
        let types = [
            "cardio", "olympic_weightlifting", "plyometrics", "powerlifting",
            "strength", "stretching", "strongman",
        ];
        Self {
            muscles: muscles.iter().map(|s| s.to_string()).collect(),
            types: types.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitlabConfig {
    pub catalog: CatalogConfig,
    pub filters: FilterOptions,
}

impl FitlabConfig {
    /// Resolve the config file path from the environment and platform dirs.
    pub fn default_path() -> PathBuf {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(p);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fitlab")
            .join("config.toml")
    }

    /// Load from `path`. Returns defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the default path and apply environment overrides.
    pub fn load_default() -> Result<Self, ConfigError> {
        let mut config = Self::load(&Self::default_path())?;
        config.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Replace the API key when an override is present and non-blank.
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.catalog.api_key = key.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let cfg = FitlabConfig::load(Path::new("/nonexistent/fitlab/config.toml")).unwrap();
        assert_eq!(cfg, FitlabConfig::default());
        assert!(cfg.catalog.api_key.is_empty());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[catalog]\napi_key = \"abc\"\ntimeout_secs = 10\n").unwrap();

        let cfg = FitlabConfig::load(&path).unwrap();
        assert_eq!(cfg.catalog.api_key, "abc");
        assert_eq!(cfg.catalog.timeout_secs, Some(10));
        assert_eq!(cfg.catalog.host, "exercisedb.p.rapidapi.com");
        assert_eq!(cfg.filters, FilterOptions::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        assert!(matches!(
            FitlabConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn env_key_overrides_file_key() {
        let mut cfg = FitlabConfig::default();
        cfg.catalog.api_key = "from-file".into();

        cfg.apply_api_key_override(Some("   ".into()));
        assert_eq!(cfg.catalog.api_key, "from-file");

        cfg.apply_api_key_override(Some(" from-env ".into()));
        assert_eq!(cfg.catalog.api_key, "from-env");

        cfg.apply_api_key_override(None);
        assert_eq!(cfg.catalog.api_key, "from-env");
    }
}
