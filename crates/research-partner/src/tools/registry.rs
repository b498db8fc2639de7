//! Name-indexed tool lookup and dispatch.

use serde::Serialize;
use serde_json::Value;

use super::{ResearchTool, ToolContext, ToolParameter, register_all_tools};
use crate::models::ToolEnvelope;

/// Public description of a registered tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    /// Tool name.
    pub name: &'static str,

    /// Description for the model.
    pub description: &'static str,

    /// Typed parameter list.
    pub parameters: Vec<ToolParameter>,

    /// JSON Schema equivalent of `parameters`.
    pub input_schema: Value,
}

/// Registry of every tool available to agent runtimes.
pub struct ToolRegistry {
    ctx: ToolContext,
    tools: Vec<Box<dyn ResearchTool>>,
}

impl ToolRegistry {
    /// Registry with all six research tools.
    #[must_use]
    pub fn new(ctx: ToolContext) -> Self {
        Self::with_tools(ctx, register_all_tools())
    }

    /// Registry over an explicit tool list.
    #[must_use]
    pub fn with_tools(ctx: ToolContext, tools: Vec<Box<dyn ResearchTool>>) -> Self {
        Self { ctx, tools }
    }

    /// Look up a tool by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ResearchTool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// Describe every registered tool, in registration order.
    #[must_use]
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .map(|tool| ToolInfo {
                name: tool.name(),
                description: tool.description(),
                parameters: tool.parameters(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Execute a tool by name. Returns `None` for unknown tools.
    pub async fn call(&self, name: &str, args: Value) -> Option<ToolEnvelope> {
        let tool = self.get(name)?;
        tracing::debug!(tool = name, "Dispatching tool call");
        Some(tool.execute(&self.ctx, args).await)
    }

    /// Number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.tools.iter().map(|t| t.name()).collect();
        f.debug_struct("ToolRegistry").field("tools", &names).finish()
    }
}
