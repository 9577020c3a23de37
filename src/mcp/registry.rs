// src/mcp/registry.rs
// Explicit tool registry: name -> handler + description + input schema

use crate::error::{JobLinksError, Result};
use async_trait::async_trait;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Executes one tool. Receives the raw argument object from the host.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    async fn call(&self, arguments: JsonObject) -> Result<Value>;
}

/// A tool with its metadata
pub struct RegisteredTool {
    name: String,
    description: String,
    input_schema: Arc<JsonObject>,
    handler: Arc<dyn ToolHandler>,
}

impl RegisteredTool {
    /// MCP tool definition advertised in tools/list
    pub fn definition(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        )
    }
}

/// JSON schema of an argument type, as an MCP input schema object
pub fn schema_for<P: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(P);
    match serde_json::to_value(schema) {
        Ok(Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}

/// Tools available to the host, built once at startup
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Names must be unique.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Arc<JsonObject>,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<()> {
        let name = name.into();
        if self.tools.contains_key(&name) {
            return Err(JobLinksError::DuplicateTool(name));
        }

        info!(tool_name = %name, "registered tool");
        self.tools.insert(
            name.clone(),
            RegisteredTool {
                name,
                description: description.into(),
                input_schema,
                handler,
            },
        );
        Ok(())
    }

    /// Register a tool whose input schema is derived from `P`
    pub fn register_typed<P: JsonSchema>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<()> {
        self.register(name, description, schema_for::<P>(), handler)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.get(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Definitions of all tools, sorted by name
    pub fn definitions(&self) -> Vec<Tool> {
        self.tools.values().map(RegisteredTool::definition).collect()
    }

    /// Dispatch a call to the named tool
    pub async fn call(&self, name: &str, arguments: JsonObject) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| JobLinksError::UnknownTool(name.to_string()))?;

        debug!(tool_name = %name, "dispatching tool call");
        tool.handler.call(arguments).await
    }
}
