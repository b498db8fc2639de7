//! Provider response envelopes.
//!
//! Only the outer page structure is typed; individual records stay as raw
//! JSON so the normalization layer can default every field independently.

use serde::Deserialize;
use serde_json::Value;

/// A page of papers (search and author papers endpoints).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperPage {
    /// Total number of matches, when reported.
    #[serde(default)]
    pub total: Option<u64>,

    /// Raw paper records.
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl PaperPage {
    /// Raw records, empty when the provider sent none.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        self.data.unwrap_or_default()
    }
}

/// A page of author matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorPage {
    /// Matching authors in provider order.
    #[serde(default)]
    pub data: Option<Vec<AuthorMatch>>,
}

impl AuthorPage {
    /// First match, if any. Ambiguous names are not disambiguated.
    #[must_use]
    pub fn first(&self) -> Option<&AuthorMatch> {
        self.data.as_deref()?.first()
    }
}

/// One author search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorMatch {
    /// Semantic Scholar author ID.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Author name as known to the provider.
    #[serde(default)]
    pub name: Option<String>,
}

/// A page of citation edges (citations or references endpoint).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitationPage {
    /// Edges in provider order.
    #[serde(default)]
    pub data: Option<Vec<CitationEdge>>,
}

impl CitationPage {
    /// Edges, empty when the provider sent none.
    #[must_use]
    pub fn into_edges(self) -> Vec<CitationEdge> {
        self.data.unwrap_or_default()
    }
}

/// One citation edge. Citations carry `citingPaper`, references `citedPaper`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationEdge {
    /// The paper citing the seed.
    #[serde(default)]
    pub citing_paper: Option<Value>,

    /// The paper cited by the seed.
    #[serde(default)]
    pub cited_paper: Option<Value>,
}

/// Recommendations response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPage {
    /// Raw recommended paper records.
    #[serde(default)]
    pub recommended_papers: Option<Vec<Value>>,
}

impl RecommendationPage {
    /// Raw records, empty when the provider sent none.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        self.recommended_papers.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_page_tolerates_null_data() {
        let page: PaperPage = serde_json::from_str(r#"{"total": 0, "data": null}"#).unwrap();
        assert!(page.into_records().is_empty());
    }

    #[test]
    fn test_author_page_first_match() {
        let page: AuthorPage = serde_json::from_str(
            r#"{"total": 2, "data": [{"authorId": "1", "name": "A"}, {"authorId": "2", "name": "B"}]}"#,
        )
        .unwrap();
        assert_eq!(page.first().and_then(|a| a.author_id.as_deref()), Some("1"));
        assert!(AuthorPage::default().first().is_none());
    }

    #[test]
    fn test_citation_edge_aliases() {
        let page: CitationPage = serde_json::from_str(
            r#"{"data": [{"citingPaper": {"title": "A"}}, {"citedPaper": {"title": "B"}}]}"#,
        )
        .unwrap();
        let edges = page.into_edges();
        assert!(edges[0].citing_paper.is_some());
        assert!(edges[1].cited_paper.is_some());
    }
}
