//! Network tools: citationNetwork, getRecommendations.

use serde_json::Value;

use super::{
    MAX_PROVIDER_LIMIT, ResearchTool, ToolContext, ToolParameter, clamp_limit, require_non_blank,
};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::models::{
    CitationNetworkInput, NetworkPaper, Payload, PayloadKind, RecommendationsInput, ToolEnvelope,
};
use crate::normalize::{normalize_network_paper, normalize_recommendation};

/// Citation network tool.
pub struct CitationNetworkTool;

#[async_trait::async_trait]
impl ResearchTool for CitationNetworkTool {
    fn name(&self) -> &'static str {
        "citationNetwork"
    }

    fn description(&self) -> &'static str {
        "Get citation relationships for a paper."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter::required_string("paperId", "The Semantic Scholar paper ID"),
            ToolParameter::optional_integer(
                "limit",
                "Number of citations/references to retrieve",
                5,
            ),
        ]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Network
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to fetch citation network"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: CitationNetworkInput = serde_json::from_value(input)?;
        let paper_id = require_non_blank("paperId", &params.paper_id)?;
        let limit = clamp_limit(params.limit, MAX_PROVIDER_LIMIT);

        tracing::info!(paper_id, limit, "Fetching citation network");

        // Both sides run concurrently; the first failure aborts the whole call.
        let (citing, cited) = tokio::try_join!(
            ctx.client.get_citations(paper_id, limit, fields::NETWORK),
            ctx.client.get_references(paper_id, limit, fields::NETWORK),
        )?;

        let base = ctx.client.paper_site_url();
        let citations: Vec<NetworkPaper> = citing
            .into_edges()
            .iter()
            .map(|edge| normalize_network_paper(edge.citing_paper.as_ref(), base))
            .collect();
        let references: Vec<NetworkPaper> = cited
            .into_edges()
            .iter()
            .map(|edge| normalize_network_paper(edge.cited_paper.as_ref(), base))
            .collect();

        Ok(ToolEnvelope::success(
            format!(
                "Found {} citing papers and {} references",
                citations.len(),
                references.len()
            ),
            Payload::Network { citations, references },
        ))
    }
}

/// Paper recommendations tool.
pub struct RecommendationsTool;

#[async_trait::async_trait]
impl ResearchTool for RecommendationsTool {
    fn name(&self) -> &'static str {
        "getRecommendations"
    }

    fn description(&self) -> &'static str {
        "Get recommended papers similar to a given paper."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter::required_string("paperId", "The Semantic Scholar paper ID"),
            ToolParameter::optional_integer("limit", "Number of recommendations", 5),
        ]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Recommendations
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to fetch recommendations"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: RecommendationsInput = serde_json::from_value(input)?;
        let paper_id = require_non_blank("paperId", &params.paper_id)?;
        let limit = clamp_limit(params.limit, MAX_PROVIDER_LIMIT);

        tracing::info!(paper_id, limit, "Fetching recommendations");

        let page = ctx.client.get_recommendations(paper_id, limit, fields::RECOMMENDATIONS).await?;
        let base = ctx.client.paper_site_url();
        let recommendations: Vec<_> =
            page.into_records().iter().map(|raw| normalize_recommendation(raw, base)).collect();

        if recommendations.is_empty() {
            return Err(ToolError::not_found("No recommendations found for this paper."));
        }

        Ok(ToolEnvelope::success(
            format!("Found {} recommended papers", recommendations.len()),
            Payload::Recommendations { recommendations },
        ))
    }
}
