//! CLI utilities for DevHub tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Status messages
//! - Search result rendering

#![warn(missing_docs)]

pub mod output;
pub mod results;
