//! Glob-based selection of files that get C0 cases.

use crate::diff::normalize_path;
use crate::error::{DiffcovError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude globs.
///
/// Note: globset's `*` also matches `/`, so `src/*.cs` matches nested files.
#[derive(Debug, Clone)]
pub struct FileFilter {
    include: GlobSet,
    exclude: GlobSet,
}

impl FileFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include, "include_globs")?,
            exclude: build_globset(exclude, "exclude_globs")?,
        })
    }

    /// Whether a repo-relative path is included and not excluded.
    pub fn is_match(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.include.is_match(&path) && !self.exclude.is_match(&path)
    }
}

fn build_globset(patterns: &[String], field_name: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized_pattern = normalize_path(pattern);
        let glob = Glob::new(&normalized_pattern).map_err(|e| {
            DiffcovError::ConfigError(format!(
                "invalid glob pattern in {}: '{}' - {}",
                field_name, pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder.build().map_err(|e| {
        DiffcovError::ConfigError(format!("failed to compile {} globs: {}", field_name, e))
    })
}
