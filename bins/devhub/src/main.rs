//! devhub - search the DevHub catalog of developer tools and cheatsheets.

use clap::{Parser, Subcommand, ValueEnum};
use devhub_core::error::{exit_codes, Error};
use devhub_search::KindFilter;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Search DevHub tools and cheatsheets
#[derive(Parser)]
#[command(name = "devhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a .devhub.toml configuration file
    #[arg(short, long, global = true, env = "DEVHUB_CONFIG")]
    config: Option<String>,

    /// Load the catalog from a JSON or TOML file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    All,
    Tool,
    Cheatsheet,
}

impl From<KindArg> for KindFilter {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::All => KindFilter::All,
            KindArg::Tool => KindFilter::Tool,
            KindArg::Cheatsheet => KindFilter::Cheatsheet,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and rank the catalog
    Search {
        /// Free-text query (fuzzy, typo tolerant)
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Restrict to a kind of entry
        #[arg(short, long, value_enum, default_value = "all")]
        kind: KindArg,

        /// Exact category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Required tag (repeat to require several)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories in catalog order
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all tags
    Tags {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Toggle an item in the favorites list
    Favorite {
        /// Slug of the item
        slug: String,
    },

    /// List favorites
    Favorites {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match commands::Context::load(cli.config.as_deref(), cli.catalog.as_deref(), cli.verbose) {
        Ok(ctx) => ctx,
        Err(err) => return report(&err),
    };

    let result = match cli.command {
        Commands::Search { query, kind, category, tags, favorites, limit, json } => {
            let args = commands::search::SearchArgs {
                query: query.join(" "),
                kind: kind.into(),
                category,
                tags,
                favorites_only: favorites,
                limit,
                json,
            };
            commands::search::run(&ctx, &args)
        }
        Commands::Categories { json } => commands::facets::categories(&ctx, json),
        Commands::Tags { json } => commands::facets::tags(&ctx, json),
        Commands::Favorite { slug } => commands::favorites::toggle(&ctx, &slug),
        Commands::Favorites { json } => commands::favorites::list(&ctx, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print an error chain and pick the exit code
fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("{} {:#}", "Error:".red().bold(), err);
    let code = err
        .downcast_ref::<Error>()
        .map_or(exit_codes::FAILURE, |e| e.code.exit_code());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
