//! Filter-then-rank search over a catalog.

use crate::catalog::CatalogItem;
use crate::favorites::FavoriteSet;
use crate::filter::{self, FilterCriteria};
use crate::rank::{self, RankedResult};
use crate::relevance::{MatchOptions, MatchScorer, WeightedScorer};

/// Stateless search front door.
///
/// Holds only the scorer configuration; the catalog, criteria, favorites
/// and query are passed in on every call.
#[derive(Debug, Clone)]
pub struct SearchEngine<S = WeightedScorer> {
    scorer: S,
}

impl SearchEngine<WeightedScorer> {
    /// Creates an engine using the weighted scorer.
    pub fn new(options: MatchOptions) -> Self {
        Self {
            scorer: WeightedScorer::new(options),
        }
    }
}

impl Default for SearchEngine<WeightedScorer> {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

impl<S: MatchScorer> SearchEngine<S> {
    /// Creates an engine around a custom scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// The scorer in use.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Exact-match stage only.
    pub fn filter<'a, I>(
        &self,
        items: I,
        criteria: &FilterCriteria,
        favorites: &FavoriteSet,
    ) -> Vec<&'a CatalogItem>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        filter::filter(items, criteria, favorites)
    }

    /// Fuzzy stage only.
    pub fn rank<'a, I>(&self, items: I, query: &str) -> Vec<RankedResult<'a>>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        rank::rank(items, query, &self.scorer)
    }

    /// Filters by `criteria`, then ranks the survivors against `query`.
    pub fn search<'a, I>(
        &self,
        items: I,
        criteria: &FilterCriteria,
        favorites: &FavoriteSet,
        query: &str,
    ) -> Vec<RankedResult<'a>>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        let candidates = self.filter(items, criteria, favorites);
        let candidate_count = candidates.len();
        let results = self.rank(candidates, query);

        tracing::debug!(
            query = %query,
            candidates = candidate_count,
            results = results.len(),
            "Catalog search completed"
        );

        results
    }

    /// Like [`search`](Self::search), keeping at most `limit` results.
    pub fn search_limited<'a, I>(
        &self,
        items: I,
        criteria: &FilterCriteria,
        favorites: &FavoriteSet,
        query: &str,
        limit: Option<usize>,
    ) -> Vec<RankedResult<'a>>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
    {
        let mut results = self.search(items, criteria, favorites, query);
        if let Some(max) = limit {
            results.truncate(max);
        }
        results
    }
}
