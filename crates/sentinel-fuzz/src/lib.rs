//! Fuzzing library for research-partner.
//!
//! This crate provides fuzzing targets for the normalization layer, tool
//! input parsing and bookmark blob loading.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_normalize -- -max_total_time=60
//! ```

pub use research_partner::{bookmarks, models, normalize};
