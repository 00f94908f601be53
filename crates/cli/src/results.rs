//! Search result rendering
//!
//! Lines are built as plain text first so they can be tested, then colored
//! on the way out.

use console::{pad_str, truncate_str, Alignment};
use devhub_search::{FavoriteSet, ItemKind, RankedResult};
use owo_colors::OwoColorize;

/// Widest a name column gets before truncation
const MAX_NAME_WIDTH: usize = 28;

/// Description cut-off
const MAX_DESCRIPTION_WIDTH: usize = 60;

/// Short label for an item kind
pub fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Tool => "tool",
        ItemKind::Cheatsheet => "cheatsheet",
    }
}

/// Column width that fits every name in `results`
pub fn name_width(results: &[RankedResult<'_>]) -> usize {
    results
        .iter()
        .map(|r| console::measure_text_width(&r.item.name))
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH)
}

/// Column values for one result, before any coloring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultColumns {
    /// `★` for favorites, a space otherwise
    pub star: &'static str,
    /// Relevance with two decimals
    pub score: String,
    /// Name padded to the column width
    pub name: String,
    /// `[tool]` or `[cheatsheet]`
    pub kind: String,
    /// Item slug
    pub slug: String,
    /// Description cut to a readable length
    pub description: String,
}

impl ResultColumns {
    /// Lay out `result` for a name column `width` chars wide
    ///
    /// Names only lose characters when they are wider than the column.
    pub fn new(result: &RankedResult<'_>, favorites: &FavoriteSet, width: usize) -> Self {
        let item = result.item;
        let name = truncate_str(&item.name, width, "…");
        Self {
            star: if favorites.contains(&item.slug) { "★" } else { " " },
            score: format!("{:.2}", result.relevance_score),
            name: pad_str(&name, width, Alignment::Left, None).into_owned(),
            kind: format!("[{}]", kind_label(item.kind)),
            slug: item.slug.clone(),
            description: truncate_str(&item.description, MAX_DESCRIPTION_WIDTH, "…").into_owned(),
        }
    }
}

/// One uncolored result line: star, score, name, kind, slug, description
pub fn result_line(result: &RankedResult<'_>, favorites: &FavoriteSet, width: usize) -> String {
    let c = ResultColumns::new(result, favorites, width);
    format!(
        "{} {}  {}  {} {}  {}",
        c.star, c.score, c.name, c.kind, c.slug, c.description
    )
}

/// Print results to stdout, best first
pub fn print_results(results: &[RankedResult<'_>], favorites: &FavoriteSet) {
    let width = name_width(results);
    for result in results {
        let c = ResultColumns::new(result, favorites, width);
        println!(
            "{} {}  {}  {} {}  {}",
            c.star.yellow(),
            c.score.dimmed(),
            c.name.bold(),
            c.kind.cyan(),
            c.slug.dimmed(),
            c.description
        );
    }
}
