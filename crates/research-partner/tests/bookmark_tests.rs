//! Bookmark store tests over the file and in-memory backends.

use std::sync::Arc;

use proptest::prelude::*;

use research_partner::bookmarks::{
    BOOKMARKS_KEY, BlobStore, BookmarkStore, FileBlobStore, MemoryBlobStore,
};
use research_partner::error::StoreError;
use research_partner::models::{Paper, Year};

fn paper(title: &str, year: i32) -> Paper {
    Paper {
        title: title.to_string(),
        authors: "A. Author".to_string(),
        year: Year::Known(year),
        url: format!("https://www.semanticscholar.org/paper/{}", title.len()),
        paper_id: Some(format!("id-{title}")),
        ..Paper::default()
    }
}

#[test]
fn test_file_store_persists_across_loads() {
    let dir = tempfile::tempdir().unwrap();

    let (mut store, err) = BookmarkStore::load(FileBlobStore::new(dir.path()));
    assert!(err.is_none());
    store.add(paper("First", 2020)).unwrap();
    store.add(paper("Second", 2021)).unwrap();
    store.remove("First").unwrap();
    store.add(paper("Third", 2022)).unwrap();

    let (reloaded, err) = BookmarkStore::load(FileBlobStore::new(dir.path()));
    assert!(err.is_none());
    assert_eq!(reloaded.list(), store.list());
    let titles: Vec<_> = reloaded.list().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Second", "Third"]);
    assert!(dir.path().join(format!("{BOOKMARKS_KEY}.json")).exists());
}

#[test]
fn test_file_store_corrupt_blob_does_not_crash() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{BOOKMARKS_KEY}.json")), "[{\"title\": 3").unwrap();

    let (mut store, err) = BookmarkStore::load(FileBlobStore::new(dir.path()));
    assert!(matches!(err, Some(StoreError::Serialization(_))));
    assert!(store.is_empty());

    // The next mutation overwrites the corrupt blob.
    store.add(paper("Fresh", 2024)).unwrap();
    let (reloaded, err) = BookmarkStore::load(FileBlobStore::new(dir.path()));
    assert!(err.is_none());
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_clear_removes_blob() {
    let blob = Arc::new(MemoryBlobStore::new());
    let (mut store, _) = BookmarkStore::load(Arc::clone(&blob));
    store.add(paper("X", 2020)).unwrap();
    assert!(blob.get(BOOKMARKS_KEY).unwrap().is_some());

    store.clear().unwrap();
    assert!(store.is_empty());
    assert!(blob.get(BOOKMARKS_KEY).unwrap().is_none());
}

#[test]
fn test_custom_key_is_isolated() {
    let blob = Arc::new(MemoryBlobStore::new());
    let (mut a, _) = BookmarkStore::load_with_key(Arc::clone(&blob), "a");
    let (b, _) = BookmarkStore::load_with_key(Arc::clone(&blob), "b");
    a.add(paper("X", 2020)).unwrap();

    let (b_reloaded, _) = BookmarkStore::load_with_key(Arc::clone(&blob), "b");
    assert!(b.is_empty());
    assert!(b_reloaded.is_empty());
}

#[test]
fn test_year_sentinel_survives_persistence() {
    let blob = Arc::new(MemoryBlobStore::new());
    let (mut store, _) = BookmarkStore::load(Arc::clone(&blob));
    store.add(Paper { title: "Undated".to_string(), ..Paper::default() }).unwrap();

    let raw = blob.get(BOOKMARKS_KEY).unwrap().unwrap();
    assert!(raw.contains("\"year\":\"N/A\""));

    let (reloaded, _) = BookmarkStore::load(Arc::clone(&blob));
    assert_eq!(reloaded.get("Undated").unwrap().year, Year::NotAvailable);
}

fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[A-Za-z0-9 ]{1,40}",                   // title
        "[A-Za-z .,]{0,60}",                    // authors
        proptest::option::of(1900i32..2030),    // year
        0u64..100_000,                          // citations
        any::<bool>(),                          // open access
        proptest::option::of("[a-f0-9]{40}"),   // paper_id
    )
        .prop_map(|(title, authors, year, citation_count, is_open_access, paper_id)| Paper {
            title,
            authors,
            year: Year::from(year),
            citation_count,
            is_open_access,
            paper_id,
            ..Paper::default()
        })
}

proptest! {
    /// Persist then reload yields the identical ordered sequence.
    #[test]
    fn roundtrip_preserves_order(papers in proptest::collection::vec(arb_paper(), 0..20)) {
        let blob = Arc::new(MemoryBlobStore::new());
        let (mut store, _) = BookmarkStore::load(Arc::clone(&blob));
        for p in papers {
            let _ = store.add(p);
        }

        let (reloaded, err) = BookmarkStore::load(Arc::clone(&blob));
        prop_assert!(err.is_none());
        prop_assert_eq!(reloaded.list(), store.list());
    }

    /// Adding the same title twice keeps exactly one entry.
    #[test]
    fn duplicate_add_keeps_one(p in arb_paper()) {
        let (mut store, _) = BookmarkStore::load(MemoryBlobStore::new());
        prop_assert!(store.add(p.clone()).is_ok());
        let is_duplicate = matches!(store.add(p.clone()), Err(StoreError::DuplicateBookmark { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(store.list().iter().filter(|b| b.title == p.title).count(), 1);
    }

    /// After remove, the title is never bookmarked.
    #[test]
    fn remove_then_absent(papers in proptest::collection::vec(arb_paper(), 1..10), pick in any::<prop::sample::Index>()) {
        let (mut store, _) = BookmarkStore::load(MemoryBlobStore::new());
        for p in &papers {
            let _ = store.add(p.clone());
        }
        let title = papers[pick.index(papers.len())].title.clone();
        prop_assert!(store.remove(&title).unwrap());
        prop_assert!(!store.is_bookmarked(&title));
    }
}
