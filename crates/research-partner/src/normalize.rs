//! Normalization of provider JSON into the canonical shapes.
//!
//! Every function here is total: missing, null, empty or wrongly-typed fields
//! fall back to the defaults below and never produce an error.

use serde_json::Value;

use crate::models::{Dataset, NetworkPaper, Paper, PaperDetails, SOURCE_SEMANTIC_SCHOLAR, Year};

/// Title used when the provider has none.
pub const UNTITLED: &str = "Untitled";

/// Authors placeholder for search results.
pub const UNKNOWN_AUTHORS: &str = "Unknown authors";

/// Short placeholder used by recommendations and citation networks.
pub const UNKNOWN: &str = "Unknown";

/// Abstract placeholder.
pub const NO_ABSTRACT: &str = "No abstract available";

/// Dataset description placeholder.
pub const NO_DESCRIPTION: &str = "No description available";

/// Dataset tags placeholder.
pub const NO_TAGS: &str = "No tags";

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

/// Abstract length for recommendation results.
pub const RECOMMENDATION_ABSTRACT_LEN: usize = 200;

/// Number of dataset tags kept.
pub const MAX_DATASET_TAGS: usize = 5;

/// Normalize a raw paper record.
///
/// `provider_base_url` is the site prefix used to synthesize
/// `<base>/paper/<paperId>` when the record has no direct URL.
#[must_use]
pub fn normalize_paper(raw: &Value, provider_base_url: &str) -> Paper {
    paper_with_defaults(raw, provider_base_url, UNKNOWN_AUTHORS)
}

/// Normalize a recommended paper: short author placeholder, abstract cut to
/// [`RECOMMENDATION_ABSTRACT_LEN`] characters.
#[must_use]
pub fn normalize_recommendation(raw: &Value, provider_base_url: &str) -> Paper {
    let paper = paper_with_defaults(raw, provider_base_url, UNKNOWN);
    Paper {
        r#abstract: truncate_abstract(&paper.r#abstract, RECOMMENDATION_ABSTRACT_LEN),
        ..paper
    }
}

/// Normalize a paper detail record with its extended fields.
#[must_use]
pub fn normalize_details(raw: &Value, provider_base_url: &str) -> PaperDetails {
    PaperDetails {
        paper: normalize_paper(raw, provider_base_url),
        reference_count: count_field(raw, "referenceCount"),
        fields_of_study: join_strings(raw.get("fieldsOfStudy"), usize::MAX),
        publication_date: str_field(raw, "publicationDate").map(str::to_string),
        journal: raw
            .get("journal")
            .and_then(|journal| str_field(journal, "name"))
            .map(str::to_string),
    }
}

/// Normalize one side of a citation edge into the reduced network shape.
///
/// A missing edge side yields an all-defaults entry rather than being dropped.
#[must_use]
pub fn normalize_network_paper(raw: Option<&Value>, provider_base_url: &str) -> NetworkPaper {
    let raw = raw.unwrap_or(&Value::Null);
    let paper_id = str_field(raw, "paperId").map(str::to_string);
    NetworkPaper {
        title: str_field(raw, "title").unwrap_or(UNKNOWN).to_string(),
        authors: author_names(raw).unwrap_or_else(|| UNKNOWN.to_string()),
        year: year_field(raw),
        citation_count: count_field(raw, "citationCount"),
        url: resolve_url(raw, paper_id.as_deref(), provider_base_url),
        paper_id,
    }
}

/// Normalize a raw Hub dataset record.
///
/// Returns `None` for records without an `id`, since neither the name nor the
/// URL can be derived without one.
#[must_use]
pub fn normalize_dataset(raw: &Value, hub_base_url: &str) -> Option<Dataset> {
    let id = str_field(raw, "id")?.to_string();
    Some(Dataset {
        name: id.clone(),
        description: str_field(raw, "description").unwrap_or(NO_DESCRIPTION).to_string(),
        downloads: count_field(raw, "downloads"),
        likes: count_field(raw, "likes"),
        tags: join_strings(raw.get("tags"), MAX_DATASET_TAGS)
            .unwrap_or_else(|| NO_TAGS.to_string()),
        url: dataset_url(hub_base_url, &id),
        last_modified: str_field(raw, "lastModified").unwrap_or(UNKNOWN).to_string(),
        id,
    })
}

/// Truncate `text` to `max_len` characters and append [`ELLIPSIS`].
///
/// Text of at most `max_len` characters is returned unchanged, without an
/// ellipsis. Lengths are counted in `char`s, so code points are never split.
#[must_use]
pub fn truncate_abstract(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Canonical paper URL: `<base>/paper/<id>`.
#[must_use]
pub fn canonical_paper_url(provider_base_url: &str, paper_id: &str) -> String {
    format!("{}/paper/{paper_id}", provider_base_url.trim_end_matches('/'))
}

/// Dataset page URL: `<base>/datasets/<id>`.
#[must_use]
pub fn dataset_url(hub_base_url: &str, id: &str) -> String {
    format!("{}/datasets/{id}", hub_base_url.trim_end_matches('/'))
}

fn paper_with_defaults(raw: &Value, provider_base_url: &str, authors_default: &str) -> Paper {
    let paper_id = str_field(raw, "paperId").map(str::to_string);
    Paper {
        title: str_field(raw, "title").unwrap_or(UNTITLED).to_string(),
        authors: author_names(raw).unwrap_or_else(|| authors_default.to_string()),
        year: year_field(raw),
        r#abstract: str_field(raw, "abstract").unwrap_or(NO_ABSTRACT).to_string(),
        citation_count: count_field(raw, "citationCount"),
        is_open_access: raw.get("isOpenAccess").and_then(Value::as_bool).unwrap_or(false),
        url: resolve_url(raw, paper_id.as_deref(), provider_base_url),
        paper_id,
        source: SOURCE_SEMANTIC_SCHOLAR.to_string(),
    }
}

/// Direct URL if present, else the canonical URL for the ID, else empty.
fn resolve_url(raw: &Value, paper_id: Option<&str>, provider_base_url: &str) -> String {
    str_field(raw, "url")
        .map(str::to_string)
        .or_else(|| paper_id.map(|id| canonical_paper_url(provider_base_url, id)))
        .unwrap_or_default()
}

/// Author names joined with ", ". Entries may be bare strings or `{"name": ..}`.
fn author_names(raw: &Value) -> Option<String> {
    let names: Vec<&str> = raw
        .get("authors")?
        .as_array()?
        .iter()
        .filter_map(|author| match author {
            Value::String(name) => Some(name.as_str()),
            other => str_field(other, "name"),
        })
        .filter(|name| !name.trim().is_empty())
        .collect();

    (!names.is_empty()).then(|| names.join(", "))
}

/// Non-empty string field.
fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Non-negative integer field, 0 when absent or invalid.
fn count_field(raw: &Value, key: &str) -> u64 {
    raw.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// Year field; absent, zero or out-of-range values are "N/A".
fn year_field(raw: &Value) -> Year {
    raw.get("year")
        .and_then(Value::as_i64)
        .filter(|year| *year != 0)
        .and_then(|year| i32::try_from(year).ok())
        .into()
}

/// Join the first `limit` string entries of a JSON array.
fn join_strings(value: Option<&Value>, limit: usize) -> Option<String> {
    let items: Vec<&str> = value?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .take(limit)
        .collect();

    (!items.is_empty()).then(|| items.join(", "))
}
