// src/error.rs
// Standardized error types for job-links

use thiserror::Error;

/// Main error type for the job-links library
#[derive(Error, Debug)]
pub enum JobLinksError {
    /// No Serper credential was found in the environment or settings file.
    /// The message is part of the tool contract and must not change.
    #[error("API key not configured")]
    MissingApiKey,

    #[error("search API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("tool already registered: {0}")]
    DuplicateTool(String),
}

/// Convenience type alias for Result using JobLinksError
pub type Result<T> = std::result::Result<T, JobLinksError>;

impl JobLinksError {
    /// Convert to user-facing string for MCP tool boundaries
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }

    /// True for errors caused by the caller rather than by the search backend
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            JobLinksError::InvalidArguments { .. } | JobLinksError::UnknownTool(_)
        )
    }
}
