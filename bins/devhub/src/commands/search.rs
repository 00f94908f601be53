//! `devhub search`

use super::Context;
use devhub_cli::output::{format_count, format_duration, Status};
use devhub_cli::results::print_results;
use devhub_search::{FilterCriteria, KindFilter};
use devhub_telemetry::Timer;

/// Arguments for a search run
pub struct SearchArgs {
    pub query: String,
    pub kind: KindFilter,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub favorites_only: bool,
    pub limit: Option<usize>,
    pub json: bool,
}

impl SearchArgs {
    /// Criteria built fresh from the command line
    pub fn criteria(&self) -> FilterCriteria {
        let criteria = FilterCriteria::new()
            .with_kind(self.kind)
            .with_tags(self.tags.iter().cloned())
            .favorites_only(self.favorites_only);
        match &self.category {
            Some(category) => criteria.with_category(category.clone()),
            None => criteria,
        }
    }
}

/// Filter and rank the catalog, then print the results
pub fn run(ctx: &Context, args: &SearchArgs) -> anyhow::Result<()> {
    let favorites = ctx.favorites.load()?;
    let criteria = args.criteria();
    let limit = args.limit.or(ctx.config.schema.search.limit);

    let timer = Timer::start("search");
    let results = ctx
        .engine
        .search_limited(&ctx.catalog, &criteria, &favorites, &args.query, limit);
    let elapsed = timer.stop();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::warning("No matching tools or cheatsheets");
        if !criteria.is_unrestricted() {
            Status::hint("Try removing --category, --tag, --kind or --favorites");
        }
        return Ok(());
    }

    print_results(&results, &favorites);
    Status::hint(&format!(
        "{} in {}",
        format_count(results.len(), "result", "results"),
        format_duration(elapsed)
    ));
    Ok(())
}
