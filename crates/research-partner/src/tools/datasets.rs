//! Dataset tools: datasetSearch.

use serde_json::Value;

use super::{
    MAX_PROVIDER_LIMIT, ResearchTool, ToolContext, ToolParameter, clamp_limit, require_non_blank,
};
use crate::error::{ToolError, ToolResult};
use crate::models::{DatasetSearchInput, Payload, PayloadKind, ToolEnvelope};
use crate::normalize::normalize_dataset;

/// Hugging Face dataset search tool.
pub struct DatasetSearchTool;

#[async_trait::async_trait]
impl ResearchTool for DatasetSearchTool {
    fn name(&self) -> &'static str {
        "datasetSearch"
    }

    fn description(&self) -> &'static str {
        "Search for datasets on Hugging Face Hub. Returns real dataset data with working URLs."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter::required_string("query", "The dataset type or topic"),
            ToolParameter::optional_integer("limit", "Number of datasets to retrieve", 10),
        ]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Datasets
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to fetch datasets"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: DatasetSearchInput = serde_json::from_value(input)?;
        let query = require_non_blank("query", &params.query)?;
        let limit = clamp_limit(params.limit, MAX_PROVIDER_LIMIT);

        tracing::info!(query, limit, "Searching datasets");

        let records = ctx.client.search_datasets(query, limit).await?;
        let base = ctx.client.dataset_site_url();
        // Provider order (downloads, descending) is kept as-is.
        let datasets: Vec<_> = records
            .iter()
            .filter_map(|raw| normalize_dataset(raw, base))
            .take(limit as usize)
            .collect();

        if datasets.is_empty() {
            return Err(ToolError::not_found(format!("No datasets found for \"{query}\".")));
        }

        Ok(ToolEnvelope::success(
            format!("Found {} datasets for \"{query}\"", datasets.len()),
            Payload::Datasets { datasets },
        ))
    }
}
