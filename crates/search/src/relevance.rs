//! Weighted multi-field relevance scoring.
//!
//! Scores are distances: 0.0 is a perfect match, 1.0 is no match at all.
//! Each query token is located in a field with [`approximate_find`], which
//! charges one unit per edit (normalized by token length) plus a small
//! penalty for how far from the start of the field the match begins.

use crate::catalog::CatalogItem;
use crate::fuzzy::approximate_find;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Distance above which a field does not match.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Characters of offset that cost a full unit of distance.
pub const DEFAULT_DISTANCE: usize = 100;

/// Shortest token that takes part in matching.
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Relative importance of each searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub description: f64,
    pub category: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 0.4,
            description: 0.3,
            category: 0.2,
            tags: 0.1,
        }
    }
}

impl FieldWeights {
    /// Scales the weights so they sum to one.
    ///
    /// Negative weights count as zero. If nothing is left, every field
    /// gets an equal share.
    pub fn normalized(&self) -> Self {
        let clamp = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let (name, description, category, tags) = (
            clamp(self.name),
            clamp(self.description),
            clamp(self.category),
            clamp(self.tags),
        );
        let total = name + description + category + tags;
        if total <= 0.0 {
            return Self {
                name: 0.25,
                description: 0.25,
                category: 0.25,
                tags: 0.25,
            };
        }
        Self {
            name: name / total,
            description: description / total,
            category: category / total,
            tags: tags / total,
        }
    }
}

/// Tuning knobs for the weighted matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Highest per-field distance still accepted (0.0 = exact only)
    pub threshold: f64,
    /// Offset, in chars, that costs a full unit of distance
    pub distance: usize,
    /// Ignore where in the field a match starts
    pub ignore_location: bool,
    /// Query tokens shorter than this are dropped
    pub min_match_char_length: usize,
    /// Per-field weights
    pub weights: FieldWeights,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
            min_match_char_length: DEFAULT_MIN_MATCH_CHAR_LENGTH,
            weights: FieldWeights::default(),
        }
    }
}

/// A free-text query split into lower-cased tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
    phrase: Option<String>,
}

impl Query {
    /// Splits on whitespace and drops tokens shorter than `min_len` chars.
    pub fn parse(raw: &str, min_len: usize) -> Self {
        let words: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();
        let phrase = (words.len() > 1).then(|| words.join(" "));
        let tokens = words
            .into_iter()
            .filter(|token| token.chars().count() >= min_len.max(1))
            .collect();
        Self { tokens, phrase }
    }

    /// Tokens that take part in matching.
    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Every word of a multi-word query, short ones included, joined by
    /// single spaces.
    #[inline]
    pub fn phrase(&self) -> Option<&str> {
        self.phrase.as_deref()
    }

    /// Returns true if no token survived parsing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Scores one item against a parsed query.
///
/// Implementations return the raw distance in `[0, 1]`, or `None` when the
/// item should be dropped from the results.
pub trait MatchScorer: Send + Sync {
    /// Minimum token length used when parsing queries for this scorer.
    fn min_match_char_length(&self) -> usize {
        DEFAULT_MIN_MATCH_CHAR_LENGTH
    }

    /// Distance of `item` from `query`.
    fn score_match(&self, item: &CatalogItem, query: &Query) -> Option<f64>;
}

/// Default scorer: weighted, typo-tolerant matching over name,
/// description, category and tags.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    options: MatchOptions,
    weights: FieldWeights,
}

impl WeightedScorer {
    /// Creates a scorer from options.
    pub fn new(options: MatchOptions) -> Self {
        let weights = options.weights.normalized();
        Self { options, weights }
    }

    /// The options this scorer was built with.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Distance of a single token from a lower-cased field value.
    pub fn token_distance(&self, field: &str, token: &str) -> Option<f64> {
        let found = approximate_find(field, token)?;
        let len = token.chars().count().max(1);
        let accuracy = found.errors as f64 / len as f64;
        let proximity = if self.options.ignore_location {
            0.0
        } else if self.options.distance == 0 {
            if found.start == 0 { 0.0 } else { 1.0 }
        } else {
            found.start as f64 / self.options.distance as f64
        };

        let score = accuracy + proximity;
        (score <= self.options.threshold).then_some(score.min(1.0))
    }

    /// Distance of a whole query from a field.
    ///
    /// A multi-word query is first matched as one phrase, so typing a full name
    /// scores like a single exact token. Separately every token must match
    /// on its own and their mean is taken. The closer of the two wins.
    pub fn field_distance(&self, field: &str, query: &Query) -> Option<f64> {
        if field.is_empty() || query.is_empty() {
            return None;
        }
        let field = field.to_lowercase();
        let phrase = query
            .phrase()
            .and_then(|phrase| self.token_distance(&field, phrase));
        let tokens = self.mean_token_distance(&field, query);
        match (phrase, tokens) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn mean_token_distance(&self, field: &str, query: &Query) -> Option<f64> {
        let mut total = 0.0;
        for token in query.tokens() {
            total += self.token_distance(field, token)?;
        }
        Some(total / query.tokens().len() as f64)
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(MatchOptions::default())
    }
}

impl MatchScorer for WeightedScorer {
    fn min_match_char_length(&self) -> usize {
        self.options.min_match_char_length
    }

    fn score_match(&self, item: &CatalogItem, query: &Query) -> Option<f64> {
        let tags = item.tags.join(" ");
        let fields = [
            (item.name.as_str(), self.weights.name),
            (item.description.as_str(), self.weights.description),
            (item.category.as_str(), self.weights.category),
            (tags.as_str(), self.weights.tags),
        ];

        let mut matched = false;
        let mut total = 1.0_f64;
        for (value, weight) in fields {
            if weight <= 0.0 {
                continue;
            }
            if let Some(distance) = self.field_distance(value, query) {
                matched = true;
                let base = if distance == 0.0 { f64::EPSILON } else { distance };
                total *= base.powf(weight * field_norm(value));
            }
        }

        matched.then(|| total.clamp(0.0, 1.0))
    }
}

/// Length norm: longer fields count for a little less.
fn field_norm(value: &str) -> f64 {
    let words = value.unicode_words().count();
    if words <= 1 {
        return 1.0;
    }
    let norm = 1.0 / (words as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
