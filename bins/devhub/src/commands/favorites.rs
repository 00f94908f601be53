//! `devhub favorite` and `devhub favorites`

use super::Context;
use devhub_cli::output::Status;
use devhub_cli::results::print_results;
use devhub_search::{FilterCriteria, RankedResult};

/// Toggle a slug in the favorites file
pub fn toggle(ctx: &Context, slug: &str) -> anyhow::Result<()> {
    let now_favorite = ctx.favorites.toggle(slug, &ctx.catalog)?;
    tracing::info!(slug = %slug, favorite = now_favorite, "Favorite toggled");

    let name = ctx
        .catalog
        .get(slug)
        .map_or(slug, |item| item.name.as_str());
    if now_favorite {
        Status::success(&format!("Added {} to favorites", name));
    } else {
        Status::success(&format!("Removed {} from favorites", name));
    }
    Ok(())
}

/// List favorites in catalog order
pub fn list(ctx: &Context, json: bool) -> anyhow::Result<()> {
    let mut favorites = ctx.favorites.load()?;
    let stale = favorites.prune(&ctx.catalog);
    if stale > 0 {
        tracing::warn!(stale, "Ignoring favorites that are not in the catalog");
    }

    let criteria = FilterCriteria::new().favorites_only(true);
    let items = ctx.engine.filter(&ctx.catalog, &criteria, &favorites);

    if json {
        let slugs: Vec<&str> = items.iter().map(|item| item.slug.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&slugs)?);
        return Ok(());
    }

    if items.is_empty() {
        Status::info("No favorites yet. Add one with `devhub favorite <slug>`");
        return Ok(());
    }

    let results: Vec<RankedResult<'_>> = items.into_iter().map(RankedResult::unranked).collect();
    print_results(&results, &favorites);
    Ok(())
}
