//! Exact-match filtering.
//!
//! Runs before any fuzzy ranking. Criteria are plain values: each update
//! method consumes the old criteria and returns a new one.

use crate::catalog::{CatalogItem, ItemKind};
use crate::favorites::FavoriteSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    /// Any kind
    #[default]
    All,
    /// Tools only
    Tool,
    /// Cheatsheets only
    Cheatsheet,
}

impl KindFilter {
    /// Returns true if `kind` passes this restriction.
    #[inline]
    pub fn accepts(self, kind: ItemKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Tool => kind == ItemKind::Tool,
            KindFilter::Cheatsheet => kind == ItemKind::Cheatsheet,
        }
    }
}

impl From<ItemKind> for KindFilter {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Tool => KindFilter::Tool,
            ItemKind::Cheatsheet => KindFilter::Cheatsheet,
        }
    }
}

/// Query-shaping criteria applied before ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Kind restriction
    pub kind: KindFilter,
    /// Exact category; `None` or empty means any
    pub category: Option<String>,
    /// Every listed tag must be present on the item
    pub tags: BTreeSet<String>,
    /// Only keep favorites
    pub favorites_only: bool,
}

impl FilterCriteria {
    /// Criteria that let everything through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns criteria with the kind replaced.
    pub fn with_kind(self, kind: KindFilter) -> Self {
        Self { kind, ..self }
    }

    /// Returns criteria with the category replaced. Empty clears it.
    pub fn with_category(self, category: impl Into<String>) -> Self {
        let category = category.into();
        Self {
            category: (!category.is_empty()).then_some(category),
            ..self
        }
    }

    /// Returns criteria with no category restriction.
    pub fn without_category(self) -> Self {
        Self {
            category: None,
            ..self
        }
    }

    /// Returns criteria with `tag` added to the required set.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Returns criteria with the required tag set replaced.
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Returns criteria with the favorites gate set.
    pub fn favorites_only(self, favorites_only: bool) -> Self {
        Self {
            favorites_only,
            ..self
        }
    }

    /// The category restriction, if any.
    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns true if nothing is restricted.
    pub fn is_unrestricted(&self) -> bool {
        self.kind == KindFilter::All
            && self.category().is_none()
            && self.tags.is_empty()
            && !self.favorites_only
    }

    /// The full predicate for a single item.
    pub fn matches(&self, item: &CatalogItem, favorites: &FavoriteSet) -> bool {
        self.kind.accepts(item.kind)
            && self.category().is_none_or(|category| item.category == category)
            && self.tags.iter().all(|tag| item.has_tag(tag))
            && (!self.favorites_only || favorites.contains(&item.slug))
    }
}

/// Keeps the items that satisfy `criteria`, in their original order.
pub fn filter<'a, I>(items: I, criteria: &FilterCriteria, favorites: &FavoriteSet) -> Vec<&'a CatalogItem>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    items
        .into_iter()
        .filter(|item| criteria.matches(item, favorites))
        .collect()
}
