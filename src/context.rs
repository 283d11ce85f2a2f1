//! Repository context resolution for diffcov.
//!
//! Finds the Git repository root from any working directory (or the
//! `--repo` path) so every command reads the same `.diffcov.yaml` and runs
//! git from the same place.

use crate::config::CONFIG_FILE_NAME;
use crate::error::{DiffcovError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Resolved paths for a diffcov invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct RepoContext {
    /// Absolute path to the top level of the working tree.
    pub repo_root: PathBuf,
}

impl RepoContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RepoContext)` - Successfully resolved context
    /// * `Err(DiffcovError::UserError)` - If not in a git repository (exit code 1)
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            DiffcovError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory inside a repository.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();

        if !cwd.is_dir() {
            return Err(DiffcovError::UserError(format!(
                "repository path '{}' is not a directory",
                cwd.display()
            )));
        }

        let repo_root = git::get_repo_root(cwd)?;
        Ok(Self { repo_root })
    }

    /// Path to the optional config file.
    pub fn config_path(&self) -> PathBuf {
        self.repo_root.join(CONFIG_FILE_NAME)
    }
}

/// Resolve the context from `--repo` when given, else from the working directory.
pub fn resolve_context(repo: Option<&Path>) -> Result<RepoContext> {
    match repo {
        Some(path) => RepoContext::resolve_from(path),
        None => RepoContext::resolve(),
    }
}
