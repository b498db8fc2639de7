#![no_main]

use libfuzzer_sys::fuzz_target;
use research_partner::bookmarks::{BOOKMARKS_KEY, BookmarkStore, MemoryBlobStore};

fuzz_target!(|data: &[u8]| {
    // A corrupt blob must load as an empty set, never panic
    if let Ok(raw) = std::str::from_utf8(data) {
        let (store, err) = BookmarkStore::load(MemoryBlobStore::with_blob(BOOKMARKS_KEY, raw));
        if err.is_some() {
            assert!(store.is_empty());
        }
    }
});
