// src/search/types.rs
// Request, record and outcome types for job searches

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel for a field that could not be resolved from the search result
pub const NOT_AVAILABLE: &str = "N/A";

/// Platform searched when the caller does not name one
pub const DEFAULT_PLATFORM: &str = "LinkedIn";

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

/// Arguments of the `get_job_links` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    #[schemars(description = "Search query, e.g. \"Software Engineer\" or \"Data Analyst Chicago\"")]
    pub query: String,
    #[serde(default = "default_platform")]
    #[schemars(description = "Job board to search, e.g. \"LinkedIn\", \"Indeed\". Defaults to LinkedIn.")]
    pub platform: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            platform: platform.into(),
        }
    }

    /// Build a request from command-line words, joined with single spaces
    pub fn from_words<S: AsRef<str>>(words: &[S], platform: impl Into<String>) -> Self {
        let query = words.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        Self::new(query, platform)
    }
}

/// One organic hit as returned by the search provider. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// A normalized job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub description: String,
}

/// Successful search payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub jobs: Vec<JobRecord>,
    pub total: usize,
    pub search_query: String,
    /// RFC 3339 timestamp of when the results were normalized
    pub timestamp: String,
}

/// Failure payload. `extra` keeps any sibling keys of a provider error object
/// so it can be passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Value::String(message.into()),
            extra: Map::new(),
        }
    }

    /// Take an object carrying an `error` key as-is. Returns None otherwise.
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let mut extra = object.clone();
        let error = extra.remove("error")?;
        Some(Self { error, extra })
    }
}

/// Result of one `get_job_links` call: exactly one of the two shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Failure(ErrorPayload),
    Success(JobListing),
}

impl SearchOutcome {
    pub fn failure(message: impl Into<String>) -> Self {
        SearchOutcome::Failure(ErrorPayload::new(message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchOutcome::Failure(_))
    }

    pub fn jobs(&self) -> Option<&[JobRecord]> {
        match self {
            SearchOutcome::Success(listing) => Some(&listing.jobs),
            SearchOutcome::Failure(_) => None,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            serde_json::json!({ "error": format!("failed to serialize outcome: {e}") })
        })
    }
}
