//! Command implementations

pub mod facets;
pub mod favorites;
pub mod search;

use anyhow::Context as _;
use devhub_core::config::Config;
use devhub_core::store::{CatalogStore, FavoritesStore};
use devhub_search::{Catalog, FieldWeights, MatchOptions, SearchEngine};
use devhub_telemetry::TelemetryConfig;
use std::path::Path;

/// Everything a command needs, loaded once per run
pub struct Context {
    pub config: Config,
    pub catalog: Catalog,
    pub favorites: FavoritesStore,
    pub engine: SearchEngine,
}

impl Context {
    /// Load configuration, start logging, then read the catalog
    pub fn load(config_path: Option<&str>, catalog_path: Option<&Path>, verbose: bool) -> anyhow::Result<Self> {
        let config = Config::load(config_path)?;

        let telemetry = if verbose {
            TelemetryConfig::verbose()
        } else {
            TelemetryConfig::with_level(&config.schema.log.level)
        };
        devhub_telemetry::init_with_config(telemetry)?;

        if let Some(path) = &config.path {
            tracing::debug!(path = %path, "Using configuration file");
        }

        let catalog_path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| config.catalog_path());
        let catalog = CatalogStore::load(catalog_path.as_deref())?;

        let favorites = FavoritesStore::new(
            config
                .favorites_path()
                .context("Locating the favorites file")?,
        );

        let engine = SearchEngine::new(match_options(&config));

        Ok(Self {
            config,
            catalog,
            favorites,
            engine,
        })
    }
}

/// Map the `[search]` config section onto matcher options
pub fn match_options(config: &Config) -> MatchOptions {
    let search = &config.schema.search;
    MatchOptions {
        threshold: search.threshold,
        distance: search.distance,
        ignore_location: search.ignore_location,
        min_match_char_length: search.min_match_char_length,
        weights: FieldWeights {
            name: search.weights.name,
            description: search.weights.description,
            category: search.weights.category,
            tags: search.weights.tags,
        },
    }
}
