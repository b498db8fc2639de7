//! Input models for tool parameters.
//!
//! Field names follow the agent-facing parameter names (camelCase).

use serde::{Deserialize, Serialize};

/// Input for `searchPapers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPapersInput {
    /// The research topic or query to search for.
    pub query: String,

    /// Number of papers to retrieve (clamped to 1..=20).
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

/// Input for `searchByAuthor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchByAuthorInput {
    /// The author name.
    pub author_name: String,

    /// Number of papers to retrieve.
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

/// Input for `getPaperDetails`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetailsInput {
    /// The Semantic Scholar paper ID.
    pub paper_id: String,
}

/// Input for `citationNetwork`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationNetworkInput {
    /// The Semantic Scholar paper ID.
    pub paper_id: String,

    /// Number of citations/references to retrieve.
    #[serde(default = "default_network_limit")]
    pub limit: i64,
}

/// Input for `getRecommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsInput {
    /// The Semantic Scholar paper ID.
    pub paper_id: String,

    /// Number of recommendations.
    #[serde(default = "default_network_limit")]
    pub limit: i64,
}

/// Input for `datasetSearch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSearchInput {
    /// The dataset type or topic.
    pub query: String,

    /// Number of datasets to retrieve.
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

/// Default limit for paper, author and dataset searches.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Default limit for citation networks and recommendations.
pub const DEFAULT_NETWORK_LIMIT: i64 = 5;

fn default_search_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT
}

fn default_network_limit() -> i64 {
    DEFAULT_NETWORK_LIMIT
}
