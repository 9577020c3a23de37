// src/search/serper.rs
// Serper (google.serper.dev) search client

use super::SearchProvider;
use crate::config::SerperConfig;
use crate::error::{JobLinksError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Default Serper search endpoint
pub const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";

/// Region code sent with every request
pub const REGION: &str = "us";
/// Language code sent with every request
pub const LANGUAGE: &str = "en";
/// Result-count hint sent with every request
pub const RESULT_COUNT: u32 = 100;

/// Request body for the Serper search endpoint
#[derive(Debug, Serialize)]
pub struct SerperRequest<'a> {
    pub q: &'a str,
    pub gl: &'static str,
    pub hl: &'static str,
    pub num: u32,
}

impl<'a> SerperRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            q: query,
            gl: REGION,
            hl: LANGUAGE,
            num: RESULT_COUNT,
        }
    }
}

/// Single-attempt Serper client. No retries, no caching.
pub struct SerperClient {
    http_client: Client,
    config: SerperConfig,
}

impl SerperClient {
    pub fn new(config: SerperConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// POST the query and return the decoded JSON body.
    ///
    /// Fails closed without a network call when no API key is configured.
    pub async fn search_raw(&self, query: &str) -> Result<Value> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            warn!("SERPER_API_KEY not set, skipping search");
            return Err(JobLinksError::MissingApiKey);
        };

        info!(query = %query, endpoint = %self.config.endpoint, "Attempting Serper search");

        let response = self
            .http_client
            .post(&self.config.endpoint)
            .header("X-API-KEY", api_key)
            .json(&SerperRequest::new(query))
            .send()
            .await
            .inspect_err(|e| warn!(error = %e, "Serper request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Serper returned an error status");
            return Err(JobLinksError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .inspect_err(|e| warn!(error = %e, "Failed to decode Serper response"))?;

        debug!(
            organic = ?body.get("organic").and_then(serde_json::Value::as_array).map(Vec::len),
            "Serper search complete"
        );
        Ok(body)
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str) -> Result<Value> {
        self.search_raw(query).await
    }

    fn provider_name(&self) -> &str {
        "Serper"
    }
}
