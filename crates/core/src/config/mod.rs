//! Configuration loading and schema definitions
//!
//! DevHub reads an optional `.devhub.toml`; every field has a default.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
