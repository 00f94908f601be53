//! Configuration schema definitions

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub favorites: FavoritesConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl ConfigSchema {
    /// Check value ranges that TOML types alone cannot express.
    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if !(0.0..=1.0).contains(&search.threshold) {
            return Err(invalid_value(
                "search.threshold",
                format!("must be between 0.0 and 1.0, got {}", search.threshold),
            ));
        }
        for (field, weight) in [
            ("search.weights.name", search.weights.name),
            ("search.weights.description", search.weights.description),
            ("search.weights.category", search.weights.category),
            ("search.weights.tags", search.weights.tags),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid_value(field, format!("must be a non-negative number, got {weight}")));
            }
        }
        if search.limit == Some(0) {
            return Err(invalid_value("search.limit", "must be at least 1 when set"));
        }
        if !LOG_LEVELS.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(invalid_value(
                "log.level",
                format!("unknown level '{}'", self.log.level),
            ));
        }
        Ok(())
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

fn invalid_value(field: &str, message: impl Into<String>) -> Error {
    Error::new(
        ErrorCode::InvalidConfigValue,
        format!("Invalid value for {}: {}", field, message.into()),
    )
    .with_suggestion("Fix the value in your .devhub.toml or remove it to use the default")
}

/// Fuzzy matching settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Highest per-field distance still accepted (0.0 = exact only)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Character offset that costs a full unit of distance
    #[serde(default = "default_distance")]
    pub distance: usize,

    /// Ignore where in a field a match starts
    #[serde(default)]
    pub ignore_location: bool,

    /// Query tokens shorter than this are ignored
    #[serde(default = "default_min_match_char_length")]
    pub min_match_char_length: usize,

    /// Default cap on printed results
    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub weights: WeightsConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            distance: default_distance(),
            ignore_location: false,
            min_match_char_length: default_min_match_char_length(),
            limit: None,
            weights: WeightsConfig::default(),
        }
    }
}

fn default_threshold() -> f64 {
    0.3
}

fn default_distance() -> usize {
    100
}

fn default_min_match_char_length() -> usize {
    2
}

/// Per-field ranking weights
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_name_weight")]
    pub name: f64,
    #[serde(default = "default_description_weight")]
    pub description: f64,
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_tags_weight")]
    pub tags: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            description: default_description_weight(),
            category: default_category_weight(),
            tags: default_tags_weight(),
        }
    }
}

fn default_name_weight() -> f64 {
    0.4
}

fn default_description_weight() -> f64 {
    0.3
}

fn default_category_weight() -> f64 {
    0.2
}

fn default_tags_weight() -> f64 {
    0.1
}

/// Catalog source
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file; the built-in catalog is used when unset
    #[serde(default)]
    pub path: Option<String>,
}

/// Favorites storage
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FavoritesConfig {
    /// Favorites file; defaults to the user data directory
    #[serde(default)]
    pub path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
