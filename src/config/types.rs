//! Configuration types and defaults for diffcov.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// File name of the optional config file at the repository root.
pub const CONFIG_FILE_NAME: &str = ".diffcov.yaml";

/// Smallest accepted side-by-side column width.
pub const MIN_COLUMN_WIDTH: u32 = 10;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable tables (default).
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

pub(crate) fn default_context_lines() -> u32 {
    3
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_include_globs() -> Vec<String> {
    vec!["**/*.cs".to_string()]
}

pub(crate) fn default_column_width() -> u32 {
    60
}
