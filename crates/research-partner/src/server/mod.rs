//! Tool server front-end.
//!
//! Exposes a [`ToolRegistry`] to agent runtimes over stdio JSON-RPC.

pub mod protocol;
pub mod stdio;

use std::sync::Arc;

use crate::client::ResearchClient;
use crate::tools::{ToolContext, ToolRegistry};

/// Stdio tool server.
pub struct ToolServer {
    registry: ToolRegistry,
}

impl ToolServer {
    /// Server exposing every research tool.
    #[must_use]
    pub fn new(client: ResearchClient) -> Self {
        Self::with_registry(ToolRegistry::new(ToolContext::new(Arc::new(client))))
    }

    /// Server over an existing registry.
    #[must_use]
    pub const fn with_registry(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting tool server in stdio mode");
        tracing::info!("Registered {} tools", self.registry.len());

        stdio::run_stdio(&self.registry).await
    }
}

impl std::fmt::Debug for ToolServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolServer").field("tools", &self.registry.len()).finish()
    }
}
