// src/config/env.rs
// Environment-based configuration - single source of truth for env vars

use tracing::{debug, info};

/// Serper API key (SERPER_API_KEY)
pub const SERPER_API_KEY_VAR: &str = "SERPER_API_KEY";
/// Override for the Serper search endpoint (SERPER_ENDPOINT)
pub const SERPER_ENDPOINT_VAR: &str = "SERPER_ENDPOINT";

/// Values read from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Serper API key
    pub serper_api_key: Option<String>,
    /// Serper endpoint override
    pub serper_endpoint: Option<String>,
}

impl EnvConfig {
    /// Load all environment configuration (call once at startup, after .env files)
    pub fn load() -> Self {
        info!("Loading environment configuration");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, filtering empty values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let config = Self {
            serper_api_key: read(SERPER_API_KEY_VAR),
            serper_endpoint: read(SERPER_ENDPOINT_VAR),
        };
        debug!(
            api_key = config.serper_api_key.is_some(),
            endpoint = ?config.serper_endpoint,
            "Environment configuration read"
        );
        config
    }
}
