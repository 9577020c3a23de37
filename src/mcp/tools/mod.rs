// src/mcp/tools/mod.rs
// Tool handlers and the startup registry

pub mod jobs;

use crate::error::Result;
use crate::mcp::registry::ToolRegistry;
use crate::search::{JobSearch, SearchRequest};
use std::sync::Arc;

/// Build the registry handed to the MCP server
pub fn build_registry(search: JobSearch) -> Result<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry.register_typed::<SearchRequest>(
        jobs::NAME,
        jobs::DESCRIPTION,
        Arc::new(jobs::GetJobLinks::new(search)),
    )?;
    Ok(registry)
}
