// src/mcp/mod.rs
// MCP Server implementation

pub mod registry;
pub mod tools;

pub use registry::{ToolHandler, ToolRegistry};

use rmcp::{
    ErrorData, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// MCP Server state
#[derive(Clone)]
pub struct JobLinksServer {
    registry: Arc<ToolRegistry>,
}

impl JobLinksServer {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }
}

/// Tool results are returned to the host as one JSON text block
pub fn render_result(value: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

impl ServerHandler for JobLinksServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "job_links".into(),
                title: Some("job-links - recent job postings via web search".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Use get_job_links to find job postings from the last 24 hours on a job board.".into(),
            ),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult {
            tools: self.registry.definitions(),
            next_cursor: None,
            meta: None,
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move {
            let tool_name = request.name.to_string();
            let start = std::time::Instant::now();

            let result = self
                .registry
                .call(&tool_name, request.arguments.unwrap_or_default())
                .await;
            let duration_ms = start.elapsed().as_millis() as u64;

            match result {
                Ok(value) => {
                    debug!(tool_name = %tool_name, duration_ms, "tool call finished");
                    Ok(render_result(&value))
                }
                Err(e) if e.is_protocol_error() => {
                    warn!(tool_name = %tool_name, error = %e, "rejected tool call");
                    Err(ErrorData::invalid_params(e.to_user_string(), None))
                }
                Err(e) => {
                    warn!(tool_name = %tool_name, error = %e, duration_ms, "tool call failed");
                    Err(ErrorData::internal_error(e.to_user_string(), None))
                }
            }
        }
    }
}
