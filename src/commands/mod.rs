//! Command implementations for diffcov.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the setup shared by every command.

mod cases;
mod files;
mod side_by_side;

use crate::cli::{Command, RevisionArgs};
use crate::config::Config;
use crate::context::{RepoContext, resolve_context};
use crate::diff::{DiffLine, parse_unified_diff, split_file_patches};
use crate::error::{DiffcovError, Result};
use crate::git::verify_revision;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(repo: Option<&Path>, command: Command) -> Result<()> {
    match command {
        Command::Files(args) => files::cmd_files(repo, args),
        Command::SideBySide(args) => side_by_side::cmd_side_by_side(repo, args),
        Command::Cases(args) => cases::cmd_cases(repo, args),
    }
}

/// Everything a command needs before it touches revisions.
pub(crate) struct Session {
    pub ctx: RepoContext,
    pub config: Config,
}

impl Session {
    /// Resolve the repository, load its config, and check both revisions exist.
    pub(crate) fn open(repo: Option<&Path>, revisions: &RevisionArgs) -> Result<Self> {
        let ctx = resolve_context(repo)?;
        let config = Config::load_or_default(&ctx)?;

        for revision in [&revisions.old, &revisions.new] {
            let sha = verify_revision(&ctx.repo_root, revision)?;
            debug!(%revision, %sha, "resolved revision");
        }

        Ok(Self { ctx, config })
    }
}

/// Parse the section of a (possibly multi-file) patch that belongs to `path`.
///
/// Falls back to the first section, and to the whole text when it has no
/// `diff --git` sections at all.
pub(crate) fn diff_lines_for(patch: &str, path: &str) -> Vec<DiffLine> {
    let sections = split_file_patches(patch);
    let section = sections
        .iter()
        .find(|section| section.new_path.as_deref() == Some(path))
        .or_else(|| {
            sections
                .iter()
                .find(|section| section.old_path.as_deref() == Some(path))
        })
        .or_else(|| sections.first());

    match section {
        Some(section) => parse_unified_diff(&section.text),
        None => parse_unified_diff(patch),
    }
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| DiffcovError::UserError(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
