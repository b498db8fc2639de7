//! Canonical paper shapes produced by the normalization layer.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Source tag for papers coming from Semantic Scholar.
pub const SOURCE_SEMANTIC_SCHOLAR: &str = "semantic_scholar";

/// Publication year, or the `"N/A"` sentinel when the provider has none.
///
/// Serialized as a JSON number or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Year {
    /// A known publication year.
    Known(i32),
    /// The provider did not report a year.
    #[default]
    NotAvailable,
}

impl Year {
    /// Sentinel text for a missing year.
    pub const SENTINEL: &'static str = "N/A";

    /// Get the numeric year if known.
    #[must_use]
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Known(year) => Some(year),
            Self::NotAvailable => None,
        }
    }
}

impl From<Option<i32>> for Year {
    fn from(year: Option<i32>) -> Self {
        year.map_or(Self::NotAvailable, Self::Known)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(year) => write!(f, "{year}"),
            Self::NotAvailable => f.write_str(Self::SENTINEL),
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(year) => serializer.serialize_i32(*year),
            Self::NotAvailable => serializer.serialize_str(Self::SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawYear {
            Number(i32),
            Text(String),
        }

        Ok(match Option::<RawYear>::deserialize(deserializer)? {
            Some(RawYear::Number(year)) => Self::Known(year),
            Some(RawYear::Text(text)) => Self::from(text.trim().parse::<i32>().ok()),
            None => Self::NotAvailable,
        })
    }
}

/// A research paper in the fixed internal shape.
///
/// Also the element type of the persisted bookmark set, so missing fields in
/// a stored record fall back to the same defaults as a provider response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paper {
    /// Paper title.
    pub title: String,

    /// Author names joined with ", ".
    pub authors: String,

    /// Publication year.
    pub year: Year,

    /// Paper abstract.
    pub r#abstract: String,

    /// Number of citations.
    pub citation_count: u64,

    /// Whether the paper is open access.
    pub is_open_access: bool,

    /// Link to the paper; empty only when the provider gave neither a URL nor an ID.
    pub url: String,

    /// Provider identifier (Semantic Scholar paper ID).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,

    /// Origin provider tag.
    pub source: String,
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            authors: "Unknown authors".to_string(),
            year: Year::NotAvailable,
            r#abstract: "No abstract available".to_string(),
            citation_count: 0,
            is_open_access: false,
            url: String::new(),
            paper_id: None,
            source: SOURCE_SEMANTIC_SCHOLAR.to_string(),
        }
    }
}

impl Paper {
    /// Check whether the paper carries a usable link.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }
}

/// A paper with the extended fields of the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetails {
    /// Core paper record.
    #[serde(flatten)]
    pub paper: Paper,

    /// Number of references in this paper.
    #[serde(default)]
    pub reference_count: u64,

    /// Fields of study joined with ", ".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_of_study: Option<String>,

    /// Publication date (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Journal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
}

/// Reduced paper shape used in citation networks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPaper {
    /// Paper title.
    pub title: String,

    /// Author names joined with ", ".
    pub authors: String,

    /// Publication year.
    pub year: Year,

    /// Number of citations.
    pub citation_count: u64,

    /// Link to the paper (may be empty).
    pub url: String,

    /// Provider identifier, kept so the network can be walked further.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_serialization() {
        assert_eq!(serde_json::to_value(Year::Known(2020)).unwrap(), serde_json::json!(2020));
        assert_eq!(serde_json::to_value(Year::NotAvailable).unwrap(), serde_json::json!("N/A"));
    }

    #[test]
    fn test_year_deserialization() {
        let year: Year = serde_json::from_str("2021").unwrap();
        assert_eq!(year, Year::Known(2021));
        let year: Year = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(year, Year::NotAvailable);
        let year: Year = serde_json::from_str("null").unwrap();
        assert_eq!(year, Year::NotAvailable);
        let year: Year = serde_json::from_str("\"1999\"").unwrap();
        assert_eq!(year, Year::Known(1999));
    }

    #[test]
    fn test_paper_defaults_from_empty_record() {
        let paper: Paper = serde_json::from_str("{}").unwrap();
        assert_eq!(paper, Paper::default());
        assert_eq!(paper.title, "Untitled");
        assert!(!paper.has_url());
    }

    #[test]
    fn test_paper_wire_names() {
        let paper = Paper {
            title: "T".to_string(),
            paper_id: Some("abc".to_string()),
            ..Paper::default()
        };
        let json = serde_json::to_value(&paper).unwrap();
        assert_eq!(json["paperId"], "abc");
        assert_eq!(json["citationCount"], 0);
        assert_eq!(json["isOpenAccess"], false);
        assert_eq!(json["abstract"], "No abstract available");
        assert_eq!(json["year"], "N/A");
    }
}
