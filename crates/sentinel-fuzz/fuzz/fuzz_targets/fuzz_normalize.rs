#![no_main]

use libfuzzer_sys::fuzz_target;
use research_partner::normalize::{
    normalize_dataset, normalize_details, normalize_network_paper, normalize_paper,
    normalize_recommendation,
};

const BASE: &str = "https://www.semanticscholar.org";

fuzz_target!(|data: &[u8]| {
    // Normalization is total: any JSON value must produce a record
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let paper = normalize_paper(&json, BASE);
        assert!(!paper.title.is_empty());
        let _ = normalize_recommendation(&json, BASE);
        let _ = normalize_details(&json, BASE);
        let _ = normalize_network_paper(Some(&json), BASE);
        let _ = normalize_dataset(&json, "https://huggingface.co");
    }
});
