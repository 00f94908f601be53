//! Catalog search for DevHub.
//!
//! This crate provides:
//! - The catalog data model (tools and cheatsheets)
//! - Exact-match filtering by kind, category, tags and favorites
//! - Weighted, typo-tolerant relevance ranking
//! - Levenshtein and approximate substring search primitives
//! - A JSON front door, also exported to WASM
//!
//! Search is a pure function of its inputs: filter first, then rank.
//!
//! # Example
//!
//! ```
//! use devhub_search::{Catalog, CatalogItem, FavoriteSet, FilterCriteria, MatchOptions, SearchEngine};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::tool("JSON/YAML Converter", "json-yaml", "Convert JSON to YAML", "Converters"),
//!     CatalogItem::tool("Color Tool", "color", "Convert colors", "Design"),
//! ])
//! .unwrap();
//!
//! let engine = SearchEngine::new(MatchOptions::default());
//! let results = engine.search(&catalog, &FilterCriteria::new(), &FavoriteSet::new(), "json");
//! assert_eq!(results[0].item.slug, "json-yaml");
//! ```

mod catalog;
mod engine;
mod error;
mod favorites;
mod filter;
mod fuzzy;
mod json;
mod rank;
mod relevance;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, CatalogItem, ItemKind};
pub use engine::SearchEngine;
pub use error::{Result, SearchError, SearchErrorCode};
pub use favorites::FavoriteSet;
pub use filter::{filter, FilterCriteria, KindFilter};
pub use fuzzy::{approximate_find, levenshtein_distance, Alignment};
pub use json::search_json;
pub use rank::{rank, RankedResult};
pub use relevance::{
    FieldWeights, MatchOptions, MatchScorer, Query, WeightedScorer, DEFAULT_DISTANCE,
    DEFAULT_MIN_MATCH_CHAR_LENGTH, DEFAULT_THRESHOLD,
};
