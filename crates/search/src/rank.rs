//! Fuzzy ranking of an already-filtered item list.

use crate::catalog::CatalogItem;
use crate::relevance::{MatchScorer, Query};
use serde::Serialize;
use std::cmp::Ordering;

/// A catalog item with its relevance (1.0 is best).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<'a> {
    /// The matched item
    #[serde(flatten)]
    pub item: &'a CatalogItem,
    /// `1 - distance`, in `[0, 1]`
    pub relevance_score: f64,
}

impl<'a> RankedResult<'a> {
    /// Wraps an item with a perfect score.
    #[inline]
    pub fn unranked(item: &'a CatalogItem) -> Self {
        Self {
            item,
            relevance_score: 1.0,
        }
    }
}

/// Score `items` against `query` and return the matches, best first.
///
/// An empty or whitespace-only query passes every item through at 1.0 in
/// input order. A query whose tokens are all shorter than the scorer's
/// minimum matches nothing. Otherwise items the scorer rejects are
/// dropped and the rest are sorted by descending relevance, ties keeping
/// input order.
///
/// # Example
/// ```
/// use devhub_search::{rank, CatalogItem, WeightedScorer};
///
/// let items = vec![
///     CatalogItem::tool("Color Tool", "color", "Pick and convert colors", "Design"),
///     CatalogItem::tool("UUID Generator", "uuid-generator", "Generate UUIDs", "Generators"),
/// ];
/// let results = rank(&items, "uuid", &WeightedScorer::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].item.slug, "uuid-generator");
/// ```
pub fn rank<'a, I, S>(items: I, query: &str, scorer: &S) -> Vec<RankedResult<'a>>
where
    I: IntoIterator<Item = &'a CatalogItem>,
    S: MatchScorer + ?Sized,
{
    let items: Vec<&'a CatalogItem> = items.into_iter().collect();
    if query.trim().is_empty() {
        return items.into_iter().map(RankedResult::unranked).collect();
    }

    let query = Query::parse(query, scorer.min_match_char_length());
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored = score_all(&items, &query, scorer);

    scored.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });

    scored
}

/// Score every item, keeping accepted ones in input order.
fn score_all<'a, S>(items: &[&'a CatalogItem], query: &Query, scorer: &S) -> Vec<RankedResult<'a>>
where
    S: MatchScorer + ?Sized,
{
    let score_one = |item: &&'a CatalogItem| {
        scorer.score_match(item, query).map(|distance| RankedResult {
            item: *item,
            relevance_score: (1.0 - distance).clamp(0.0, 1.0),
        })
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().filter_map(score_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().filter_map(score_one).collect()
    }
}
