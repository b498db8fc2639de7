//! Uniform success/failure wrapper returned by every tool.

use serde::Serialize;

use super::{Dataset, NetworkPaper, Paper, PaperDetails};

/// Tool result envelope.
///
/// Serialized flat: `{"success": .., "message": .., <payload fields>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEnvelope {
    /// Whether the tool produced a result.
    pub success: bool,

    /// Human-readable summary or failure explanation.
    pub message: String,

    /// Tool-specific result data.
    #[serde(flatten)]
    pub payload: Payload,
}

/// Payload variants, one per tool family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Paper search results.
    Papers {
        /// Total matches reported by the provider.
        #[serde(rename = "totalResults", skip_serializing_if = "Option::is_none")]
        total_results: Option<u64>,
        /// Query that produced the results.
        #[serde(skip_serializing_if = "Option::is_none")]
        query: Option<String>,
        /// Resolved author name (author search only).
        #[serde(rename = "authorName", skip_serializing_if = "Option::is_none")]
        author_name: Option<String>,
        /// Papers.
        papers: Vec<Paper>,
    },
    /// Dataset search results.
    Datasets {
        /// Datasets.
        datasets: Vec<Dataset>,
    },
    /// Citation network of one paper.
    Network {
        /// Papers citing the seed.
        citations: Vec<NetworkPaper>,
        /// Papers the seed cites.
        references: Vec<NetworkPaper>,
    },
    /// Recommended papers.
    Recommendations {
        /// Recommendations.
        recommendations: Vec<Paper>,
    },
    /// Single paper detail record.
    Details {
        /// The paper, absent on failure.
        #[serde(skip_serializing_if = "Option::is_none")]
        paper: Option<Box<PaperDetails>>,
    },
    /// No payload.
    None,
}

/// Which payload a tool produces; used to build an empty failure payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// [`Payload::Papers`]
    Papers,
    /// [`Payload::Datasets`]
    Datasets,
    /// [`Payload::Network`]
    Network,
    /// [`Payload::Recommendations`]
    Recommendations,
    /// [`Payload::Details`]
    Details,
    /// [`Payload::None`]
    None,
}

impl PayloadKind {
    /// An empty payload of this kind (empty arrays, never absent).
    #[must_use]
    pub const fn empty(self) -> Payload {
        match self {
            Self::Papers => {
                Payload::Papers { total_results: None, query: None, author_name: None, papers: Vec::new() }
            }
            Self::Datasets => Payload::Datasets { datasets: Vec::new() },
            Self::Network => Payload::Network { citations: Vec::new(), references: Vec::new() },
            Self::Recommendations => Payload::Recommendations { recommendations: Vec::new() },
            Self::Details => Payload::Details { paper: None },
            Self::None => Payload::None,
        }
    }
}

impl Payload {
    /// The kind of this payload.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        match self {
            Self::Papers { .. } => PayloadKind::Papers,
            Self::Datasets { .. } => PayloadKind::Datasets,
            Self::Network { .. } => PayloadKind::Network,
            Self::Recommendations { .. } => PayloadKind::Recommendations,
            Self::Details { .. } => PayloadKind::Details,
            Self::None => PayloadKind::None,
        }
    }
}

impl ToolEnvelope {
    /// A successful envelope.
    #[must_use]
    pub fn success(message: impl Into<String>, payload: Payload) -> Self {
        Self { success: true, message: message.into(), payload }
    }

    /// A failed envelope with an empty payload of the given kind.
    ///
    /// A blank message is replaced so failures always explain themselves.
    #[must_use]
    pub fn failure(kind: PayloadKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "The operation failed for an unknown reason.".to_string()
        } else {
            message
        };
        Self { success: false, message, payload: kind.empty() }
    }

    /// Serialize to the JSON text handed to the agent runtime.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            serde_json::json!({"success": false, "message": "Failed to encode tool result"})
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_failure_payload_is_empty_array() {
        let env = ToolEnvelope::failure(PayloadKind::Papers, "No papers found");
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value, json!({"success": false, "message": "No papers found", "papers": []}));
    }

    #[test]
    fn test_failure_network_has_both_arrays() {
        let env = ToolEnvelope::failure(PayloadKind::Network, "boom");
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["citations"], json!([]));
        assert_eq!(value["references"], json!([]));
    }

    #[test]
    fn test_failure_details_omits_paper() {
        let env = ToolEnvelope::failure(PayloadKind::Details, "not found");
        let value = serde_json::to_value(&env).unwrap();
        assert!(value.get("paper").is_none());
    }

    #[test]
    fn test_failure_message_never_blank() {
        let env = ToolEnvelope::failure(PayloadKind::None, "  ");
        assert!(!env.message.trim().is_empty());
        assert_eq!(serde_json::to_value(&env).unwrap().as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_success_papers_flattened() {
        let env = ToolEnvelope::success(
            "Found 1 papers",
            Payload::Papers {
                total_results: Some(42),
                query: Some("q".to_string()),
                author_name: None,
                papers: vec![Paper::default()],
            },
        );
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["totalResults"], 42);
        assert_eq!(value["query"], "q");
        assert!(value.get("authorName").is_none());
        assert_eq!(value["papers"].as_array().unwrap().len(), 1);
    }
}
