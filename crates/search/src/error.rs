//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while building a catalog.
///
/// Searching itself never fails; an empty result is a valid answer.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Two catalog entries share a slug
    #[error("Duplicate slug in catalog: {0}")]
    DuplicateSlug(String),

    /// A catalog entry is missing a required value
    #[error("Invalid catalog item: {0}")]
    InvalidItem(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Error code for integration with devhub-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Duplicate slug
    DuplicateSlug = 11001,
    /// Invalid catalog item
    InvalidItem = 11002,
    /// Catalog document could not be parsed
    CatalogParse = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::DuplicateSlug(_) => SearchErrorCode::DuplicateSlug,
            SearchError::InvalidItem(_) => SearchErrorCode::InvalidItem,
            SearchError::JsonError(_) | SearchError::TomlError(_) => SearchErrorCode::CatalogParse,
        }
    }
}
