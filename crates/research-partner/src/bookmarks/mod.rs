//! Persistent set of bookmarked papers.
//!
//! Uniqueness is keyed by title only: two distinct papers sharing a title
//! cannot both be bookmarked. The whole ordered set is rewritten to the blob
//! store on every mutation.

mod blob;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};

use crate::error::{StoreError, StoreResult};
use crate::models::Paper;

/// Blob key holding the serialized bookmark set.
pub const BOOKMARKS_KEY: &str = "desci_research_bookmarks";

/// Ordered, title-unique bookmark set backed by a [`BlobStore`].
#[derive(Debug)]
pub struct BookmarkStore<S: BlobStore> {
    blob: S,
    key: String,
    papers: Vec<Paper>,
}

impl<S: BlobStore> BookmarkStore<S> {
    /// Load bookmarks from the default key.
    ///
    /// A missing blob yields an empty set. An unreadable or corrupt blob also
    /// yields an empty set, with the error handed back for reporting.
    pub fn load(blob: S) -> (Self, Option<StoreError>) {
        Self::load_with_key(blob, BOOKMARKS_KEY)
    }

    /// Load bookmarks from an explicit key.
    pub fn load_with_key(blob: S, key: &str) -> (Self, Option<StoreError>) {
        let (papers, error) = match read_papers(&blob, key) {
            Ok(papers) => (papers, None),
            Err(err) => {
                tracing::warn!(key, error = %err, "Bookmark data unreadable, starting empty");
                (Vec::new(), Some(err))
            }
        };

        let store = Self { blob, key: key.to_string(), papers: dedupe_by_title(papers) };
        (store, error)
    }

    /// Append a paper and persist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateBookmark`] if the title is already
    /// bookmarked, or the storage error if persisting fails. The set is
    /// unchanged on error.
    pub fn add(&mut self, paper: Paper) -> StoreResult<()> {
        if self.is_bookmarked(&paper.title) {
            return Err(StoreError::duplicate(paper.title));
        }

        let mut next = self.papers.clone();
        next.push(paper);
        self.commit(next)
    }

    /// Remove the paper with this title. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// Returns the storage error if persisting fails; the set is unchanged.
    pub fn remove(&mut self, title: &str) -> StoreResult<bool> {
        if !self.is_bookmarked(title) {
            return Ok(false);
        }

        let next = self.papers.iter().filter(|p| p.title != title).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Drop every bookmark and the persisted blob.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the blob cannot be cleared.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.blob.clear(&self.key)?;
        self.papers.clear();
        Ok(())
    }

    /// Whether a paper with this exact title is bookmarked.
    #[must_use]
    pub fn is_bookmarked(&self, title: &str) -> bool {
        self.papers.iter().any(|p| p.title == title)
    }

    /// Bookmarks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Paper] {
        &self.papers
    }

    /// Bookmarked paper by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Paper> {
        self.papers.iter().find(|p| p.title == title)
    }

    /// Number of bookmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether nothing is bookmarked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Underlying blob store.
    #[must_use]
    pub const fn blob(&self) -> &S {
        &self.blob
    }

    fn commit(&mut self, next: Vec<Paper>) -> StoreResult<()> {
        let encoded = serde_json::to_string(&next)?;
        self.blob.set(&self.key, &encoded)?;
        self.papers = next;
        Ok(())
    }
}

fn read_papers<S: BlobStore>(blob: &S, key: &str) -> StoreResult<Vec<Paper>> {
    match blob.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Keep the first occurrence of each title.
fn dedupe_by_title(papers: Vec<Paper>) -> Vec<Paper> {
    let mut seen = std::collections::HashSet::new();
    papers.into_iter().filter(|p| seen.insert(p.title.clone())).collect()
}
