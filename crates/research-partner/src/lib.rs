//! Research Partner
//!
//! Agent tool layer for discovering academic papers (Semantic Scholar) and
//! datasets (Hugging Face Hub).
//!
//! # Features
//!
//! - **6 tools**: paper search, paper details, author search, citation
//!   network, recommendations, dataset search
//! - **Never-throwing envelopes**: every tool returns a flat
//!   `{success, message, ...}` JSON object
//! - **Bookmarks**: title-unique saved papers persisted to a blob store
//! - **Citations**: APA, MLA and BibTeX formatting
//! - **Stdio server**: JSON-RPC 2.0 front-end for agent runtimes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use research_partner::{Config, ResearchClient, ToolContext, ToolRegistry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ResearchClient::new(&config)?;
//!     let registry = ToolRegistry::new(ToolContext::new(Arc::new(client)));
//!
//!     let envelope = registry
//!         .call("searchPapers", serde_json::json!({"query": "crispr", "limit": 5}))
//!         .await;
//!     println!("{}", envelope.map(|e| e.to_json()).unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod bookmarks;
pub mod citation;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod server;
pub mod tools;

pub use app::AppState;
pub use bookmarks::{BlobStore, BookmarkStore, FileBlobStore, MemoryBlobStore};
pub use citation::{CitationStyle, format_citation};
pub use client::ResearchClient;
pub use config::Config;
pub use error::{ClientError, StoreError, ToolError};
pub use models::{Dataset, Paper, ToolEnvelope};
pub use tools::{ResearchTool, ToolContext, ToolRegistry};
