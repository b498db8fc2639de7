//! Agent-callable tools.
//!
//! Each tool:
//! 1. Parses and validates its input parameters
//! 2. Calls the provider through [`ResearchClient`]
//! 3. Normalizes the response and wraps it in a [`ToolEnvelope`]
//!
//! Tools never fail towards the caller: [`ResearchTool::execute`] folds every
//! error into a failed envelope.

mod datasets;
mod network;
mod papers;
mod registry;

pub use datasets::DatasetSearchTool;
pub use network::{CitationNetworkTool, RecommendationsTool};
pub use papers::{PaperDetailsTool, SearchByAuthorTool, SearchPapersTool};
pub use registry::{ToolInfo, ToolRegistry};

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::client::ResearchClient;
use crate::error::{ToolError, ToolResult};
use crate::models::{PayloadKind, ToolEnvelope};

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// API client.
    pub client: Arc<ResearchClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<ResearchClient>) -> Self {
        Self { client }
    }
}

/// Parameter type as exposed to agent runtimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// JSON string.
    String,
    /// JSON integer.
    Integer,
}

/// One entry of a tool's typed parameter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolParameter {
    /// Parameter name.
    pub name: &'static str,

    /// Parameter type.
    #[serde(rename = "type")]
    pub kind: ParamType,

    /// Free-text description for the model.
    pub description: &'static str,

    /// Whether the caller must supply it.
    pub required: bool,

    /// Value used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ToolParameter {
    /// A required string parameter.
    #[must_use]
    pub const fn required_string(name: &'static str, description: &'static str) -> Self {
        Self { name, kind: ParamType::String, description, required: true, default: None }
    }

    /// An optional integer parameter with a default.
    #[must_use]
    pub fn optional_integer(name: &'static str, description: &'static str, default: i64) -> Self {
        Self {
            name,
            kind: ParamType::Integer,
            description,
            required: false,
            default: Some(json!(default)),
        }
    }
}

/// Trait for agent-callable tools.
#[async_trait::async_trait]
pub trait ResearchTool: Send + Sync {
    /// Tool name (e.g., "searchPapers").
    fn name(&self) -> &'static str;

    /// Tool description for the LLM.
    fn description(&self) -> &'static str;

    /// Typed parameter list.
    fn parameters(&self) -> Vec<ToolParameter>;

    /// Payload produced by this tool, used for failure envelopes.
    fn payload_kind(&self) -> PayloadKind;

    /// Prefix for transport failure messages (e.g., "Failed to fetch papers").
    fn failure_prefix(&self) -> &'static str;

    /// JSON Schema for input parameters, derived from [`Self::parameters`].
    fn input_schema(&self) -> Value {
        schema_for(&self.parameters())
    }

    /// Run the tool, propagating errors.
    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope>;

    /// Run the tool and fold any error into a failed envelope.
    async fn execute(&self, ctx: &ToolContext, input: Value) -> ToolEnvelope {
        match self.run(ctx, input).await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(tool = self.name(), error = %err, "Tool returned failure envelope");
                ToolEnvelope::failure(self.payload_kind(), err.to_user_message(self.failure_prefix()))
            }
        }
    }
}

/// Build a JSON Schema object from a parameter list.
#[must_use]
pub fn schema_for(parameters: &[ToolParameter]) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in parameters {
        let mut property = json!({
            "type": param.kind,
            "description": param.description,
        });
        if let Some(default) = &param.default {
            property["default"] = default.clone();
        }
        properties.insert(param.name.to_string(), property);

        if param.required {
            required.push(param.name);
        }
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn ResearchTool>> {
    vec![
        // Paper tools (3)
        Box::new(SearchPapersTool),
        Box::new(PaperDetailsTool),
        Box::new(SearchByAuthorTool),
        // Dataset tools (1)
        Box::new(DatasetSearchTool),
        // Network tools (2)
        Box::new(CitationNetworkTool),
        Box::new(RecommendationsTool),
    ]
}

/// Trim a required string parameter, rejecting blank values.
pub(crate) fn require_non_blank<'a>(field: &str, value: &'a str) -> ToolResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::validation(field, "cannot be empty"));
    }
    Ok(trimmed)
}

/// Clamp a requested limit into `1..=max`.
pub(crate) fn clamp_limit(limit: i64, max: u32) -> u32 {
    u32::try_from(limit.clamp(1, i64::from(max))).unwrap_or(max)
}

/// Largest limit accepted by tools other than `searchPapers`.
pub(crate) const MAX_PROVIDER_LIMIT: u32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert_eq!(require_non_blank("query", "  crispr ").unwrap(), "crispr");
        let err = require_non_blank("query", "   ").unwrap_err();
        assert!(matches!(err, ToolError::Validation { ref field, .. } if field == "query"));
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(10, 20), 10);
        assert_eq!(clamp_limit(50, 20), 20);
        assert_eq!(clamp_limit(0, 20), 1);
        assert_eq!(clamp_limit(-7, 20), 1);
        assert_eq!(clamp_limit(i64::MAX, 100), 100);
    }

    #[test]
    fn test_schema_for() {
        let schema = schema_for(&[
            ToolParameter::required_string("query", "The query"),
            ToolParameter::optional_integer("limit", "How many", 10),
        ]);
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["query"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["properties"]["limit"]["default"], 10);
        assert_eq!(schema["required"], json!(["query"]));
    }
}
