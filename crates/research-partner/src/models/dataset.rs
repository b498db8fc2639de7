//! Dataset model for Hugging Face Hub results.

use serde::{Deserialize, Serialize};

/// A dataset in the fixed internal shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Hub identifier (`owner/name`).
    pub id: String,

    /// Display name (same as `id`).
    pub name: String,

    /// Description or placeholder.
    pub description: String,

    /// Download count.
    pub downloads: u64,

    /// Like count.
    pub likes: u64,

    /// First five tags joined with ", ".
    pub tags: String,

    /// Dataset page on the Hub.
    pub url: String,

    /// Last modification timestamp as reported, or "Unknown".
    pub last_modified: String,
}
