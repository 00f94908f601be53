//! Favorite slugs.
//!
//! The set is a plain value. Loading and saving it is the caller's job.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of slugs the user has marked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    slugs: BTreeSet<String>,
}

impl FavoriteSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `slug` is a favorite.
    #[inline]
    pub fn contains(&self, slug: &str) -> bool {
        self.slugs.contains(slug)
    }

    /// Adds a slug. Returns false if it was already present.
    pub fn insert(&mut self, slug: impl Into<String>) -> bool {
        self.slugs.insert(slug.into())
    }

    /// Removes a slug. Returns false if it was not present.
    pub fn remove(&mut self, slug: &str) -> bool {
        self.slugs.remove(slug)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, slug: &str) -> bool {
        if self.slugs.remove(slug) {
            false
        } else {
            self.slugs.insert(slug.to_string());
            true
        }
    }

    /// Drops slugs that no longer exist in `catalog`, returning how many went.
    pub fn prune(&mut self, catalog: &Catalog) -> usize {
        let before = self.slugs.len();
        self.slugs.retain(|slug| catalog.get(slug).is_some());
        before - self.slugs.len()
    }

    /// Number of favorites.
    #[inline]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Returns true if nothing is marked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Slugs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slugs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    #[test]
    fn test_toggle() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle("uuid-generator"));
        assert!(favorites.contains("uuid-generator"));
        assert!(!favorites.toggle("uuid-generator"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_insert_remove() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.insert("a"));
        assert!(!favorites.insert("a"));
        assert!(favorites.remove("a"));
        assert!(!favorites.remove("a"));
    }

    #[test]
    fn test_prune() {
        let catalog = Catalog::new(vec![CatalogItem::tool("A", "a", "", "x")]).unwrap();
        let mut favorites: FavoriteSet = ["a", "gone"].into_iter().collect();
        assert_eq!(favorites.prune(&catalog), 1);
        assert_eq!(favorites.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_serializes_as_array() {
        let favorites: FavoriteSet = ["jwt", "color"].into_iter().collect();
        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"["color","jwt"]"#);
        let back: FavoriteSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, favorites);
    }
}
