#![no_main]

use libfuzzer_sys::fuzz_target;
use research_partner::models::{
    CitationNetworkInput, DatasetSearchInput, PaperDetailsInput, RecommendationsInput,
    SearchByAuthorInput, SearchPapersInput,
};

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return Ok or Err
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<SearchPapersInput>(json.clone());
        let _ = serde_json::from_value::<SearchByAuthorInput>(json.clone());
        let _ = serde_json::from_value::<PaperDetailsInput>(json.clone());
        let _ = serde_json::from_value::<CitationNetworkInput>(json.clone());
        let _ = serde_json::from_value::<RecommendationsInput>(json.clone());
        let _ = serde_json::from_value::<DatasetSearchInput>(json);
    }
});
