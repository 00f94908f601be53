//! WASM bindings for catalog search.

use wasm_bindgen::prelude::*;

/// Filter and rank a catalog, returning the results as JSON.
///
/// # Arguments
/// * `catalog_json` - JSON array of catalog items
/// * `criteria_json` - JSON object with `kind`, `category`, `tags`, `favoritesOnly`
/// * `favorites_json` - JSON array of favorite slugs
/// * `query` - Free-text query
///
/// # Returns
/// JSON array of items with a `relevanceScore` field, best first.
/// Malformed input of any kind yields `[]`.
#[wasm_bindgen]
pub fn search_catalog(
    catalog_json: &str,
    criteria_json: &str,
    favorites_json: &str,
    query: &str,
) -> String {
    crate::search_json(catalog_json, criteria_json, favorites_json, query)
        .unwrap_or_else(|_| "[]".to_string())
}
