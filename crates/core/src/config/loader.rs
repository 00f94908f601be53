//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// Default favorites file name inside the data directory
const FAVORITES_FILE: &str = "favorites.json";

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults apply if none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };
        schema.validate()?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Catalog file to load instead of the built-in one, if configured
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.schema.catalog.path.as_deref().map(expand_path)
    }

    /// Where favorites are persisted
    pub fn favorites_path(&self) -> Result<PathBuf> {
        if let Some(p) = self.schema.favorites.path.as_deref() {
            return Ok(expand_path(p));
        }
        dirs::data_dir()
            .map(|dir| dir.join("devhub").join(FAVORITES_FILE))
            .ok_or_else(|| {
                Error::new(ErrorCode::DirectoryNotFound, "Could not determine the user data directory")
                    .with_suggestion("Set favorites.path in .devhub.toml")
            })
    }
}

/// Expand `~` and environment variables, leaving the input alone on failure
fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(
        shellexpand::full(path)
            .map(|expanded| expanded.into_owned())
            .unwrap_or_else(|_| path.to_string()),
    )
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".devhub.toml", "devhub.toml", ".config/devhub.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e).with_context(format!("Failed to read config file {}", path))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("Failed to parse config file {}", path))
    })
}
