//! Configuration model for diffcov.
//!
//! This module defines the Config struct that represents `.diffcov.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.
//! A missing file means all defaults.

mod filter;
mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use filter::FileFilter;
pub use model::Config;
pub use types::{CONFIG_FILE_NAME, OutputFormat};
