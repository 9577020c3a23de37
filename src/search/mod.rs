// src/search/mod.rs
// Job search: query building, provider call, result normalization

pub mod normalize;
pub mod query;
pub mod serper;
pub mod service;
pub mod types;

pub use query::ScopedQuery;
pub use serper::SerperClient;
pub use service::JobSearch;
pub use types::{JobListing, JobRecord, SearchOutcome, SearchRequest};

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// A web search backend returning the provider's raw JSON body
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Value>;
    fn provider_name(&self) -> &str;
}
