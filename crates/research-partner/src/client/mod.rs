//! HTTP client for the research data providers.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - `Accept: application/json` on every request, no auth headers
//! - Optional response caching (TTL) of successful GETs
//!
//! Failures are surfaced immediately; there is no retry or rate limiting.

mod hub;

use moka::future::Cache;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::raw::{AuthorPage, CitationPage, PaperPage, RecommendationPage};

/// Provider name used in Semantic Scholar error messages.
pub const SEMANTIC_SCHOLAR: &str = "Semantic Scholar API";

/// Provider name used in Hugging Face error messages.
pub const HUGGING_FACE: &str = "Hugging Face API";

/// Client for Semantic Scholar and the Hugging Face Hub.
#[derive(Clone)]
pub struct ResearchClient {
    /// HTTP client.
    client: Client,

    /// Response cache, disabled when TTL or capacity is zero.
    cache: Option<Cache<String, Value>>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Recommendations API base URL.
    recommendations_api_url: String,

    /// Hub API base URL.
    hub_api_url: String,

    /// Site prefix for canonical paper URLs.
    paper_site_url: String,

    /// Site prefix for dataset URLs.
    dataset_site_url: String,
}

impl ResearchClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let cache = (config.cache_max_size > 0 && !config.cache_ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(config.cache_max_size)
                .time_to_live(config.cache_ttl)
                .build()
        });

        Ok(Self {
            client,
            cache,
            graph_api_url: config.graph_api_url.clone(),
            recommendations_api_url: config.recommendations_api_url.clone(),
            hub_api_url: config.hub_api_url.clone(),
            paper_site_url: config.paper_site_url.clone(),
            dataset_site_url: config.dataset_site_url.clone(),
        })
    }

    /// Site prefix for canonical paper URLs.
    #[must_use]
    pub fn paper_site_url(&self) -> &str {
        &self.paper_site_url
    }

    /// Site prefix for dataset URLs.
    #[must_use]
    pub fn dataset_site_url(&self) -> &str {
        &self.dataset_site_url
    }

    /// Search for papers by keyword.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_papers(
        &self,
        query: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<PaperPage> {
        let url = format!("{}/paper/search", self.graph_api_url);
        let params = [
            ("query", query.to_string()),
            ("limit", limit.to_string()),
            ("fields", fields.join(",")),
        ];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Get a single paper by ID as a raw record.
    ///
    /// # Errors
    ///
    /// Returns error on API failure (404 when the ID does not resolve).
    pub async fn get_paper(&self, paper_id: &str, fields: &[&str]) -> ClientResult<Value> {
        let url = format!("{}/paper/{}", self.graph_api_url, paper_id);
        let params = [("fields", fields.join(","))];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Search for authors by name.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_authors(&self, name: &str, limit: u32) -> ClientResult<AuthorPage> {
        let url = format!("{}/author/search", self.graph_api_url);
        let params = [("query", name.to_string()), ("limit", limit.to_string())];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Get an author's papers.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_author_papers(
        &self,
        author_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<PaperPage> {
        let url = format!("{}/author/{}/papers", self.graph_api_url, author_id);
        let params = [("limit", limit.to_string()), ("fields", fields.join(","))];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Get papers citing the given paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_citations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationPage> {
        let url = format!("{}/paper/{}/citations", self.graph_api_url, paper_id);
        let params = [("limit", limit.to_string()), ("fields", fields.join(","))];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Get papers referenced by the given paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_references(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<CitationPage> {
        let url = format!("{}/paper/{}/references", self.graph_api_url, paper_id);
        let params = [("limit", limit.to_string()), ("fields", fields.join(","))];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Get recommendations for a single seed paper.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_recommendations(
        &self,
        paper_id: &str,
        limit: u32,
        fields: &[&str],
    ) -> ClientResult<RecommendationPage> {
        let url = format!("{}/papers/forpaper/{}", self.recommendations_api_url, paper_id);
        let params = [("limit", limit.to_string()), ("fields", fields.join(","))];

        self.get(SEMANTIC_SCHOLAR, &url, &params).await
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T>(
        &self,
        provider: &'static str,
        url: &str,
        params: &[(&str, String)],
    ) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let cache_key = Self::cache_key(url, params);
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&cache_key).await {
                tracing::debug!(%url, "Cache hit");
                return serde_json::from_value(cached).map_err(ClientError::from);
            }
        }

        tracing::debug!(%url, provider, "GET");
        let response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Provider returned error status");
            return Err(ClientError::status(provider, status.as_u16()));
        }

        let value: Value = response.json().await?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, value.clone()).await;
        }

        serde_json::from_value(value).map_err(ClientError::from)
    }

    /// Generate cache key.
    fn cache_key(url: &str, params: &[(&str, String)]) -> String {
        use md5::{Digest, Md5};

        let mut hasher = Md5::new();
        hasher.update(url.as_bytes());
        hasher.update(b"|");

        for (k, v) in params {
            hasher.update(k.as_bytes());
            hasher.update(b"=");
            hasher.update(v.as_bytes());
            hasher.update(b"&");
        }

        format!("{:x}", hasher.finalize())
    }
}

impl std::fmt::Debug for ResearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResearchClient")
            .field("graph_api_url", &self.graph_api_url)
            .field("hub_api_url", &self.hub_api_url)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_depends_on_params() {
        let a = ResearchClient::cache_key("u", &[("q", "a".to_string())]);
        let b = ResearchClient::cache_key("u", &[("q", "b".to_string())]);
        assert_ne!(a, b);
        assert_eq!(a, ResearchClient::cache_key("u", &[("q", "a".to_string())]));
    }

    #[test]
    fn test_testing_config_disables_cache() {
        let client = ResearchClient::new(&Config::for_testing("http://127.0.0.1:1")).unwrap();
        assert!(client.cache.is_none());
        assert!(ResearchClient::new(&Config::default()).unwrap().cache.is_some());
    }
}
