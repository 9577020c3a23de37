// src/mcp/tools/jobs.rs
// get_job_links tool handler

use crate::error::{JobLinksError, Result};
use crate::mcp::registry::ToolHandler;
use crate::search::{JobSearch, SearchRequest};
use async_trait::async_trait;
use rmcp::model::JsonObject;
use serde_json::Value;

pub const NAME: &str = "get_job_links";

pub const DESCRIPTION: &str = "Retrieves links to job postings from the last 24 hours. \
    Searches the given job board (default LinkedIn) for the query. \
    A city named in the query (Chicago, New York, Los Angeles, San Francisco) is used as the location filter. \
    Returns {jobs, total, search_query, timestamp} or {error}.";

/// Handler wrapping the job search pipeline
pub struct GetJobLinks {
    search: JobSearch,
}

impl GetJobLinks {
    pub fn new(search: JobSearch) -> Self {
        Self { search }
    }
}

#[async_trait]
impl ToolHandler for GetJobLinks {
    async fn call(&self, arguments: JsonObject) -> Result<Value> {
        let request: SearchRequest = serde_json::from_value(Value::Object(arguments)).map_err(
            |e| JobLinksError::InvalidArguments {
                tool: NAME.to_string(),
                reason: e.to_string(),
            },
        )?;

        Ok(self.search.get_job_links(&request).await.to_value())
    }
}
