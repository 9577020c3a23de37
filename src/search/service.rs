// src/search/service.rs
// One get_job_links invocation: build query, call provider, normalize

use super::normalize::normalize;
use super::query::ScopedQuery;
use super::types::{SearchOutcome, SearchRequest};
use super::SearchProvider;
use std::sync::Arc;
use tracing::{info, warn};

/// Job search pipeline over a single provider
#[derive(Clone)]
pub struct JobSearch {
    provider: Arc<dyn SearchProvider>,
}

impl JobSearch {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Find postings for a query on a platform. Never fails: provider errors
    /// come back as the `{error}` outcome.
    pub async fn get_job_links(&self, request: &SearchRequest) -> SearchOutcome {
        let scoped = ScopedQuery::build(&request.query, &request.platform);
        info!(
            search_query = %scoped,
            location = ?scoped.location(),
            provider = self.provider_name(),
            "Searching with query"
        );

        match self.provider.search(scoped.as_str()).await {
            Ok(raw) => {
                let outcome = normalize(&raw, scoped.location(), scoped.as_str());
                if let Some(jobs) = outcome.jobs() {
                    info!(total = jobs.len(), "Search complete");
                }
                outcome
            }
            Err(e) => {
                warn!(error = %e, "Error during search");
                SearchOutcome::failure(e.to_user_string())
            }
        }
    }
}
