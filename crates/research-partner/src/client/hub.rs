//! Hugging Face Hub dataset search.

use serde_json::Value;

use super::{HUGGING_FACE, ResearchClient};
use crate::error::ClientResult;

impl ResearchClient {
    /// Search datasets, most downloaded first.
    ///
    /// Sorting is done by the Hub (`sort=downloads&direction=-1`).
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_datasets(&self, query: &str, limit: u32) -> ClientResult<Vec<Value>> {
        let url = format!("{}/datasets", self.hub_api_url);
        let params = [
            ("search", query.to_string()),
            ("limit", limit.to_string()),
            ("sort", "downloads".to_string()),
            ("direction", "-1".to_string()),
        ];

        let records: Option<Vec<Value>> = self.get(HUGGING_FACE, &url, &params).await?;
        Ok(records.unwrap_or_default())
    }
}
