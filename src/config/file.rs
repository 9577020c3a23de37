// src/config/file.rs
// File-based configuration from ~/.job-links/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct JobLinksConfig {
    #[serde(default)]
    pub serper: SerperSection,
}

/// `[serper]` section
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SerperSection {
    /// API key, used when SERPER_API_KEY is not set
    pub api_key: Option<String>,
    /// Search endpoint, used when SERPER_ENDPOINT is not set
    pub endpoint: Option<String>,
}

impl JobLinksConfig {
    /// Load config from ~/.job-links/config.toml
    pub fn load() -> Self {
        Self::load_from(&config_dir().join("config.toml"))
    }

    /// Load config from an explicit path. Missing or unparsable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }
}

/// Directory holding the settings file and the optional global .env
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".job-links")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[serper]
api_key = "file-key"
endpoint = "http://127.0.0.1:8080/search"
"#;
        let config: JobLinksConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.serper.api_key.as_deref(), Some("file-key"));
        assert_eq!(
            config.serper.endpoint.as_deref(),
            Some("http://127.0.0.1:8080/search")
        );
    }

    #[test]
    fn test_parse_empty_config() {
        let config: JobLinksConfig = toml::from_str("").unwrap();
        assert!(config.serper.api_key.is_none());
        assert!(config.serper.endpoint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[serper]\napi_key = \"k\"\n").unwrap();

        let config = JobLinksConfig::load_from(&path);
        assert_eq!(config.serper.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = JobLinksConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.serper.api_key.is_none());
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[serper\napi_key = ").unwrap();

        let config = JobLinksConfig::load_from(&path);
        assert!(config.serper.api_key.is_none());
    }

    #[test]
    fn test_config_dir_name() {
        assert!(config_dir().ends_with(".job-links"));
    }
}
