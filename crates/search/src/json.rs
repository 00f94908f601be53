//! JSON in, JSON out search for callers across a language boundary.

use crate::catalog::Catalog;
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::filter::FilterCriteria;
use crate::relevance::MatchOptions;

/// Filter and rank a JSON catalog with default matching options.
///
/// `criteria_json` is an object with optional `kind`, `category`, `tags`
/// and `favoritesOnly` keys; `favorites_json` is an array of slugs. Any
/// malformed input is an error, never a silently widened search.
///
/// # Returns
/// A JSON array of items, each with a `relevanceScore`, best first.
pub fn search_json(
    catalog_json: &str,
    criteria_json: &str,
    favorites_json: &str,
    query: &str,
) -> Result<String> {
    let catalog = Catalog::from_json(catalog_json)?;
    let criteria: FilterCriteria = serde_json::from_str(criteria_json)?;
    let favorites: FavoriteSet = serde_json::from_str(favorites_json)?;

    let engine = SearchEngine::new(MatchOptions::default());
    let results = engine.search(&catalog, &criteria, &favorites, query);
    Ok(serde_json::to_string(&results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use serde_json::Value;

    const CATALOG: &str = r#"[
        {"name": "JSON/YAML Converter", "slug": "json-yaml", "description": "Convert JSON to YAML",
         "category": "Converters", "tags": ["json"], "kind": "tool"},
        {"name": "Color Tool", "slug": "color", "description": "Convert colors",
         "category": "Design", "tags": ["color"], "kind": "tool"}
    ]"#;

    fn slugs(json: &str) -> Vec<String> {
        let value: Value = serde_json::from_str(json).unwrap();
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["slug"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_ranks_and_serializes() {
        let json = search_json(CATALOG, "{}", "[]", "json").unwrap();
        assert_eq!(slugs(&json), vec!["json-yaml"]);
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["relevanceScore"].as_f64().unwrap() > 0.9);
        assert_eq!(value[0]["kind"], "tool");
    }

    #[test]
    fn test_favorites_gate_applies() {
        let json = search_json(CATALOG, r#"{"favoritesOnly": true}"#, r#"["color"]"#, "").unwrap();
        assert_eq!(slugs(&json), vec!["color"]);
    }

    #[test]
    fn test_malformed_favorites_is_an_error() {
        let err = search_json(CATALOG, "{}", r#"{"color": true}"#, "").unwrap_err();
        assert!(matches!(err, SearchError::JsonError(_)));
    }

    #[test]
    fn test_malformed_criteria_is_an_error() {
        let err = search_json(CATALOG, r#"{"kind": "widget"}"#, "[]", "").unwrap_err();
        assert!(matches!(err, SearchError::JsonError(_)));
    }

    #[test]
    fn test_invalid_catalog_is_an_error() {
        let duplicate = r#"[
            {"name": "A", "slug": "a", "description": "", "category": "X", "kind": "tool"},
            {"name": "B", "slug": "a", "description": "", "category": "X", "kind": "tool"}
        ]"#;
        let err = search_json(duplicate, "{}", "[]", "").unwrap_err();
        assert!(matches!(err, SearchError::DuplicateSlug(_)));
    }
}
