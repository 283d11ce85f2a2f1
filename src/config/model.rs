//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for diffcov.
///
/// This struct represents the contents of `.diffcov.yaml` at the repository
/// root. Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff settings
    // =========================================================================
    /// Unchanged lines of context requested from `git diff -U<n>`.
    #[serde(default = "default_context_lines")]
    pub context_lines: u32,

    /// Whether renamed files are paired when listing changed files.
    #[serde(default = "default_true")]
    pub detect_renames: bool,

    // =========================================================================
    // File selection
    // =========================================================================
    /// Globs a changed file must match to get C0 cases.
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,

    /// Globs excluding otherwise included files.
    #[serde(default)]
    pub exclude_globs: Vec<String>,

    // =========================================================================
    // Output
    // =========================================================================
    /// Default `--format` for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Width of each column in the text side-by-side view.
    #[serde(default = "default_column_width")]
    pub column_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            detect_renames: default_true(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            output_format: OutputFormat::default(),
            column_width: default_column_width(),
        }
    }
}
