// src/config/mod.rs
// Configuration resolved once at startup and passed explicitly to the search client

pub mod env;
pub mod file;

pub use env::EnvConfig;
pub use file::{JobLinksConfig, config_dir};

use crate::search::serper::SERPER_SEARCH_URL;

/// Everything the Serper client needs. The key is optional: a missing key is
/// detected per call and reported as a tool result, never as a startup failure.
#[derive(Debug, Clone)]
pub struct SerperConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
}

impl Default for SerperConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: SERPER_SEARCH_URL.to_string(),
        }
    }
}

impl SerperConfig {
    /// Environment first, then the settings file, then built-in defaults
    pub fn resolve(env: &EnvConfig, file: &JobLinksConfig) -> Self {
        let from_file = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());

        Self {
            api_key: env
                .serper_api_key
                .clone()
                .or_else(|| from_file(&file.serper.api_key)),
            endpoint: env
                .serper_endpoint
                .clone()
                .or_else(|| from_file(&file.serper.endpoint))
                .unwrap_or_else(|| SERPER_SEARCH_URL.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check the resolved configuration. A missing key is only a warning; an
    /// endpoint that is not an http(s) URL is an error and stops startup.
    pub fn validate(&self) -> ConfigValidation {
        let mut validation = ConfigValidation::new();

        if !self.has_api_key() {
            validation.add_warning(
                "SERPER_API_KEY is not set. get_job_links will return an error until it is configured.",
            );
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            validation.add_error(format!(
                "Serper endpoint '{}' is not an http(s) URL",
                self.endpoint
            ));
        }

        validation
    }
}

/// Configuration validation result
#[derive(Debug, Default)]
pub struct ConfigValidation {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ConfigValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Format as a human-readable report
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            for err in &self.errors {
                lines.push(format!("  - {}", err));
            }
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            for warn in &self.warnings {
                lines.push(format!("  - {}", warn));
            }
        }

        if lines.is_empty() {
            "Configuration OK".to_string()
        } else {
            lines.join("\n")
        }
    }
}
