//! `devhub categories` and `devhub tags`

use super::Context;

/// Print distinct categories in catalog order
pub fn categories(ctx: &Context, json: bool) -> anyhow::Result<()> {
    print_list(&ctx.catalog.categories(), json)
}

/// Print distinct tags, sorted
pub fn tags(ctx: &Context, json: bool) -> anyhow::Result<()> {
    print_list(&ctx.catalog.tags(), json)
}

fn print_list(values: &[&str], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(values)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}
