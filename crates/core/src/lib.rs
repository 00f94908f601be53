//! Core utilities for DevHub
//!
//! This crate provides shared functionality used by the search front ends:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Storage**: Catalog loading and favorites persistence
//!
//! # Example
//!
//! ```rust,no_run
//! use devhub_core::{config::Config, store::{CatalogStore, FavoritesStore}};
//!
//! let config = Config::load(None).expect("valid configuration");
//! let catalog = CatalogStore::load(config.catalog_path().as_deref()).expect("catalog");
//! let favorites = FavoritesStore::new(config.favorites_path().expect("data dir"))
//!     .load()
//!     .expect("favorites");
//! println!("{} items, {} favorites", catalog.len(), favorites.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod store;

pub use error::{Error, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result};
    pub use crate::store::{CatalogStore, FavoritesStore};
}
