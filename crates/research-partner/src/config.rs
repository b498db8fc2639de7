//! Configuration for the research tool layer.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

/// Provider endpoints and client tuning constants.
pub mod api {
    use std::time::Duration;

    /// Semantic Scholar API host.
    pub const SEMANTIC_SCHOLAR_BASE: &str = "https://api.semanticscholar.org";

    /// Semantic Scholar website, used to synthesize canonical paper URLs.
    pub const SEMANTIC_SCHOLAR_SITE: &str = "https://www.semanticscholar.org";

    /// Hugging Face Hub host (API lives under `/api`, pages under `/datasets`).
    pub const HUGGINGFACE_BASE: &str = "https://huggingface.co";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache TTL (5 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Maximum cache size.
    pub const CACHE_MAX_SIZE: u64 = 1000;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Paper field sets for API requests.
pub mod fields {
    /// Fields for keyword paper search.
    pub const SEARCH: &[&str] = &[
        "title",
        "abstract",
        "year",
        "authors",
        "citationCount",
        "isOpenAccess",
        "url",
        "paperId",
    ];

    /// Fields for a single paper's detail view.
    pub const DETAILS: &[&str] = &[
        "title",
        "abstract",
        "year",
        "authors",
        "citationCount",
        "isOpenAccess",
        "referenceCount",
        "fieldsOfStudy",
        "publicationDate",
        "journal",
        "url",
        "paperId",
    ];

    /// Fields for an author's paper list.
    pub const AUTHOR_PAPERS: &[&str] = &[
        "title",
        "abstract",
        "year",
        "authors",
        "citationCount",
        "isOpenAccess",
        "url",
        "paperId",
    ];

    /// Fields for citing/referenced papers.
    pub const NETWORK: &[&str] = &["title", "year", "authors", "citationCount", "url", "paperId"];

    /// Fields for recommendations.
    pub const RECOMMENDATIONS: &[&str] =
        &["title", "abstract", "year", "authors", "citationCount", "url", "paperId"];
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the Graph API.
    pub graph_api_url: String,

    /// Base URL for the Recommendations API.
    pub recommendations_api_url: String,

    /// Base URL for the Hugging Face Hub API.
    pub hub_api_url: String,

    /// Site prefix for canonical paper URLs (`<site>/paper/<id>`).
    pub paper_site_url: String,

    /// Site prefix for dataset URLs (`<site>/datasets/<id>`).
    pub dataset_site_url: String,

    /// Directory holding the durable bookmark record.
    pub data_dir: PathBuf,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Cache TTL.
    pub cache_ttl: Duration,

    /// Maximum cache size.
    pub cache_max_size: u64,
}

impl Config {
    /// Create a configuration for the given provider hosts.
    #[must_use]
    pub fn new(semantic_scholar_base: &str, huggingface_base: &str, data_dir: PathBuf) -> Self {
        let scholar = semantic_scholar_base.trim_end_matches('/');
        let hub = huggingface_base.trim_end_matches('/');
        Self {
            graph_api_url: format!("{scholar}/graph/v1"),
            recommendations_api_url: format!("{scholar}/recommendations/v1"),
            hub_api_url: format!("{hub}/api"),
            paper_site_url: api::SEMANTIC_SCHOLAR_SITE.to_string(),
            dataset_site_url: api::HUGGINGFACE_BASE.to_string(),
            data_dir,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            cache_ttl: api::CACHE_TTL,
            cache_max_size: api::CACHE_MAX_SIZE,
        }
    }

    /// Create a test configuration that points every provider at one mock server.
    ///
    /// Canonical URLs keep their public prefixes so assertions stay stable.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            cache_ttl: Duration::from_secs(0), // No caching in tests
            cache_max_size: 0,
            ..Self::new(base_url, base_url, std::env::temp_dir().join("research-partner-test"))
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SEMANTIC_SCHOLAR_BASE_URL`, `HUGGINGFACE_BASE_URL` and
    /// `RESEARCH_PARTNER_DATA_DIR`, falling back to the public hosts and the
    /// platform data directory.
    ///
    /// # Errors
    ///
    /// Returns error if a base URL is invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let scholar = std::env::var("SEMANTIC_SCHOLAR_BASE_URL")
            .unwrap_or_else(|_| api::SEMANTIC_SCHOLAR_BASE.to_string());
        let hub = std::env::var("HUGGINGFACE_BASE_URL")
            .unwrap_or_else(|_| api::HUGGINGFACE_BASE.to_string());
        let data_dir = std::env::var("RESEARCH_PARTNER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        Self::validated(&scholar, &hub, data_dir)
    }

    /// Create a configuration after checking both base URLs.
    ///
    /// # Errors
    ///
    /// Returns error if either URL does not parse or is not http(s).
    pub fn validated(
        semantic_scholar_base: &str,
        huggingface_base: &str,
        data_dir: PathBuf,
    ) -> anyhow::Result<Self> {
        validate_base_url("SEMANTIC_SCHOLAR_BASE_URL", semantic_scholar_base)?;
        validate_base_url("HUGGINGFACE_BASE_URL", huggingface_base)?;

        Ok(Self::new(semantic_scholar_base, huggingface_base, data_dir))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(api::SEMANTIC_SCHOLAR_BASE, api::HUGGINGFACE_BASE, default_data_dir())
    }
}

/// Platform data directory for this application.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("research-partner")
}

fn validate_base_url(name: &str, value: &str) -> anyhow::Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{name} is not a valid URL"))?;
    anyhow::ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "{name} must use http or https, got {}",
        parsed.scheme()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.graph_api_url, "https://api.semanticscholar.org/graph/v1");
        assert_eq!(config.hub_api_url, "https://huggingface.co/api");
        assert_eq!(config.paper_site_url, "https://www.semanticscholar.org");
    }

    #[test]
    fn test_config_for_testing() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.graph_api_url, "http://127.0.0.1:9999/graph/v1");
        assert_eq!(config.recommendations_api_url, "http://127.0.0.1:9999/recommendations/v1");
        assert_eq!(config.hub_api_url, "http://127.0.0.1:9999/api");
        assert_eq!(config.dataset_site_url, "https://huggingface.co");
        assert_eq!(config.cache_max_size, 0);
    }

    #[test]
    fn test_validate_base_url() {
        assert!(validate_base_url("X", "https://api.semanticscholar.org").is_ok());
        assert!(validate_base_url("X", "ftp://example.com").is_err());
        assert!(validate_base_url("X", "not a url").is_err());
    }

    #[test]
    fn test_fields() {
        assert!(fields::SEARCH.contains(&"paperId"));
        assert!(fields::DETAILS.contains(&"journal"));
        assert!(!fields::NETWORK.contains(&"abstract"));
    }
}
