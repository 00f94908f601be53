//! Catalog data model.
//!
//! A [`Catalog`] is the ordered, immutable list of tools and cheatsheets
//! that every search runs against. Slug uniqueness is checked once here so
//! the filter and ranking stages can take it for granted.

use crate::error::{Result, SearchError};
use crate::fuzzy::levenshtein_distance;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// What kind of entry an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// An interactive utility
    Tool,
    /// A reference page
    Cheatsheet,
}

/// One searchable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name
    pub name: String,
    /// Stable identifier
    pub slug: String,
    /// Short description
    pub description: String,
    /// Single-valued classification
    pub category: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tool or cheatsheet
    pub kind: ItemKind,
}

impl CatalogItem {
    /// Creates a tool entry with no tags.
    pub fn tool(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            category: category.into(),
            tags: Vec::new(),
            kind: ItemKind::Tool,
        }
    }

    /// Creates a cheatsheet entry with no tags.
    pub fn cheatsheet(
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind: ItemKind::Cheatsheet,
            ..Self::tool(name, slug, description, category)
        }
    }

    /// Replaces the tag list.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the item carries `tag` (case-sensitive).
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    items: Vec<CatalogItem>,
}

/// Validated, ordered collection of catalog items.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicate slugs.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.slug.trim().is_empty() {
                return Err(SearchError::InvalidItem(format!(
                    "item '{}' has an empty slug",
                    item.name
                )));
            }
            if !seen.insert(item.slug.as_str()) {
                return Err(SearchError::DuplicateSlug(item.slug.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parses a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Parses a TOML document with an `[[items]]` array.
    pub fn from_toml(source: &str) -> Result<Self> {
        let doc: CatalogDocument = toml::from_str(source)?;
        Self::new(doc.items)
    }

    /// All items in catalog order.
    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by slug.
    pub fn get(&self, slug: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    /// The slug closest to a mistyped one, for "did you mean" hints.
    ///
    /// Only slugs within a third of the input's length (at least two
    /// edits) are offered. Ties go to the earlier catalog entry.
    pub fn closest_slug(&self, slug: &str) -> Option<&str> {
        let max_edits = (slug.chars().count() / 3).max(2);
        self.items
            .iter()
            .map(|item| (levenshtein_distance(slug, &item.slug), item.slug.as_str()))
            .filter(|&(edits, _)| edits <= max_edits)
            .min_by_key(|&(edits, _)| edits)
            .map(|(_, slug)| slug)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Distinct tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CatalogItem> {
        vec![
            CatalogItem::tool("UUID Generator", "uuid-generator", "Generate UUIDs", "Generators")
                .with_tags(["uuid", "id"]),
            CatalogItem::tool("Hash Generator", "hash-generator", "Generate hashes", "Security")
                .with_tags(["hash", "sha"]),
            CatalogItem::cheatsheet("Git Cheatsheet", "git", "Common git commands", "Generators")
                .with_tags(["git", "id"]),
        ]
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let mut items = sample();
        items.push(CatalogItem::tool("Other", "git", "", "Misc"));
        let err = Catalog::new(items).unwrap_err();
        assert!(matches!(err, SearchError::DuplicateSlug(ref s) if s == "git"));
    }

    #[test]
    fn test_empty_slug_rejected() {
        let items = vec![CatalogItem::tool("Nameless", "  ", "", "Misc")];
        assert!(matches!(Catalog::new(items), Err(SearchError::InvalidItem(_))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.categories(), vec!["Generators", "Security"]);
    }

    #[test]
    fn test_tags_sorted_and_distinct() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.tags(), vec!["git", "hash", "id", "sha", "uuid"]);
    }

    #[test]
    fn test_get_by_slug() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.get("hash-generator").unwrap().name, "Hash Generator");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_closest_slug() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.closest_slug("uuid-generater"), Some("uuid-generator"));
        assert_eq!(catalog.closest_slug("gti"), Some("git"));
        assert_eq!(catalog.closest_slug("kubernetes"), None);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Color Tool", "slug": "color", "description": "Pick colors",
             "category": "Design", "kind": "tool"},
            {"name": "Regex", "slug": "regex-cheatsheet", "description": "Syntax",
             "category": "Reference", "tags": ["regex"], "kind": "cheatsheet"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.items()[0].tags.is_empty());
        assert_eq!(catalog.items()[1].kind, ItemKind::Cheatsheet);
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[items]]
            name = "cURL Builder"
            slug = "curl-builder"
            description = "Build cURL commands"
            category = "Network"
            tags = ["curl", "http"]
            kind = "tool"
        "#;
        let catalog = Catalog::from_toml(source).unwrap();
        assert!(catalog.get("curl-builder").unwrap().has_tag("http"));
    }

    #[test]
    fn test_unknown_kind_is_a_parse_error() {
        let json = r#"[{"name": "x", "slug": "x", "description": "", "category": "", "kind": "widget"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(SearchError::JsonError(_))));
    }
}
