//! WASM bindings for the app's web build.
//!
//! All functions take and return JSON strings; malformed input degrades to an
//! empty result rather than throwing across the boundary.

use crate::{filter_listings, parse_intent, suggest_terms, Listing, SearchParams, Vocabulary};
use wasm_bindgen::prelude::*;

fn vocab_from_json(vocab_json: &str) -> Vocabulary {
    let trimmed = vocab_json.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Vocabulary::builtin();
    }
    serde_json::from_str(trimmed).unwrap_or_else(|_| Vocabulary::builtin())
}

/// Parse a free-text search phrase into params, returned as JSON.
///
/// `vocab_json` is an object with `barangays` and `amenities` arrays; pass
/// `"{}"` to use the built-in vocabulary.
#[wasm_bindgen]
pub fn parse_query(input: &str, vocab_json: &str) -> String {
    let params = parse_intent(input, &vocab_from_json(vocab_json));
    serde_json::to_string(&params).unwrap_or_else(|_| "{}".to_string())
}

/// Filter and rank a JSON array of listings with JSON params.
///
/// Returns the surviving listings as a JSON array, relevance-ordered.
#[wasm_bindgen]
pub fn search_listings(listings_json: &str, params_json: &str) -> String {
    let listings: Vec<Listing> = match serde_json::from_str(listings_json) {
        Ok(listings) => listings,
        Err(_) => return "[]".to_string(),
    };
    let params: SearchParams = serde_json::from_str(params_json).unwrap_or_default();

    let ranked = filter_listings(&listings, &params);
    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string())
}

/// Build autocomplete suggestions as a JSON array.
///
/// `recent_json` and `popular_json` are JSON string arrays.
#[wasm_bindgen]
pub fn suggest(input: &str, recent_json: &str, popular_json: &str, vocab_json: &str) -> String {
    let recent: Vec<String> = serde_json::from_str(recent_json).unwrap_or_default();
    let popular: Vec<String> = serde_json::from_str(popular_json).unwrap_or_default();

    let suggestions = suggest_terms(input, &recent, &popular, &vocab_from_json(vocab_json));
    serde_json::to_string(&suggestions).unwrap_or_else(|_| "[]".to_string())
}
