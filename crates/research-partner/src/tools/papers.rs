//! Paper tools: searchPapers, getPaperDetails, searchByAuthor.

use serde_json::Value;

use super::{
    MAX_PROVIDER_LIMIT, ResearchTool, ToolContext, ToolParameter, clamp_limit, require_non_blank,
};
use crate::config::fields;
use crate::error::{ToolError, ToolResult};
use crate::models::{
    PaperDetailsInput, Payload, PayloadKind, SearchByAuthorInput, SearchPapersInput, ToolEnvelope,
};
use crate::normalize::{normalize_details, normalize_paper};

/// Largest page `searchPapers` will request.
pub const MAX_SEARCH_LIMIT: u32 = 20;

/// Keyword paper search tool.
pub struct SearchPapersTool;

#[async_trait::async_trait]
impl ResearchTool for SearchPapersTool {
    fn name(&self) -> &'static str {
        "searchPapers"
    }

    fn description(&self) -> &'static str {
        "Search for academic research papers on any scientific topic. Returns real paper \
         data from Semantic Scholar API with working URLs."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter::required_string("query", "The research topic or query to search for"),
            ToolParameter::optional_integer(
                "limit",
                "Number of papers to retrieve (default: 10, max: 20)",
                10,
            ),
        ]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Papers
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to fetch papers"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: SearchPapersInput = serde_json::from_value(input)?;
        let query = require_non_blank("query", &params.query)?;
        let limit = clamp_limit(params.limit, MAX_SEARCH_LIMIT);

        tracing::info!(query, limit, "Searching papers");

        let page = ctx.client.search_papers(query, limit, fields::SEARCH).await?;
        let total = page.total;
        let base = ctx.client.paper_site_url();
        let papers: Vec<_> =
            page.into_records().iter().map(|raw| normalize_paper(raw, base)).collect();

        if papers.is_empty() {
            return Err(ToolError::not_found(format!(
                "No papers found for \"{query}\". Try a different search term."
            )));
        }

        Ok(ToolEnvelope::success(
            format!("Found {} papers on \"{query}\"", papers.len()),
            Payload::Papers {
                total_results: Some(total.unwrap_or(papers.len() as u64)),
                query: Some(query.to_string()),
                author_name: None,
                papers,
            },
        ))
    }
}

/// Paper detail lookup tool.
pub struct PaperDetailsTool;

#[async_trait::async_trait]
impl ResearchTool for PaperDetailsTool {
    fn name(&self) -> &'static str {
        "getPaperDetails"
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a specific paper."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![ToolParameter::required_string("paperId", "The Semantic Scholar paper ID")]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Details
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to fetch paper details"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: PaperDetailsInput = serde_json::from_value(input)?;
        let paper_id = require_non_blank("paperId", &params.paper_id)?;

        tracing::info!(paper_id, "Fetching paper details");

        let raw = match ctx.client.get_paper(paper_id, fields::DETAILS).await {
            Ok(raw) => raw,
            Err(err) if err.is_not_found() => {
                return Err(ToolError::not_found(format!(
                    "Paper \"{paper_id}\" not found (status 404)."
                )));
            }
            Err(err) => return Err(err.into()),
        };
        if !raw.is_object() {
            return Err(ToolError::not_found(format!("Paper \"{paper_id}\" not found.")));
        }

        let details = normalize_details(&raw, ctx.client.paper_site_url());

        Ok(ToolEnvelope::success(
            format!("Retrieved details for \"{}\"", details.paper.title),
            Payload::Details { paper: Some(Box::new(details)) },
        ))
    }
}

/// Author paper search tool.
pub struct SearchByAuthorTool;

#[async_trait::async_trait]
impl ResearchTool for SearchByAuthorTool {
    fn name(&self) -> &'static str {
        "searchByAuthor"
    }

    fn description(&self) -> &'static str {
        "Find papers by a specific author."
    }

    fn parameters(&self) -> Vec<ToolParameter> {
        vec![
            ToolParameter::required_string("authorName", "The author name"),
            ToolParameter::optional_integer("limit", "Number of papers to retrieve", 10),
        ]
    }

    fn payload_kind(&self) -> PayloadKind {
        PayloadKind::Papers
    }

    fn failure_prefix(&self) -> &'static str {
        "Failed to search by author"
    }

    async fn run(&self, ctx: &ToolContext, input: Value) -> ToolResult<ToolEnvelope> {
        let params: SearchByAuthorInput = serde_json::from_value(input)?;
        let author_name = require_non_blank("authorName", &params.author_name)?;
        let limit = clamp_limit(params.limit, MAX_PROVIDER_LIMIT);

        tracing::info!(author_name, limit, "Searching papers by author");

        // First match wins; common names are not disambiguated.
        let authors = ctx.client.search_authors(author_name, 1).await?;
        let (author_id, resolved_name) = match authors.first() {
            Some(found) => match found.author_id.as_deref() {
                Some(id) if !id.is_empty() => {
                    (id.to_string(), found.name.clone().unwrap_or_else(|| author_name.to_string()))
                }
                _ => return Err(author_not_found(author_name)),
            },
            None => return Err(author_not_found(author_name)),
        };

        let page = ctx.client.get_author_papers(&author_id, limit, fields::AUTHOR_PAPERS).await?;
        let base = ctx.client.paper_site_url();
        let papers: Vec<_> =
            page.into_records().iter().map(|raw| normalize_paper(raw, base)).collect();

        Ok(ToolEnvelope::success(
            format!("Found {} papers by {resolved_name}", papers.len()),
            Payload::Papers {
                total_results: None,
                query: Some(author_name.to_string()),
                author_name: Some(resolved_name),
                papers,
            },
        ))
    }
}

fn author_not_found(author_name: &str) -> ToolError {
    ToolError::not_found(format!("No author found with name \"{author_name}\"."))
}
