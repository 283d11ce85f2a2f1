//! Implementation of the `diffcov side-by-side` command.
//!
//! Renders one file as a full two-column view:
//! 1. Resolve the file's path at the old revision (following a rename)
//! 2. Fetch both versions; a version absent at its revision is empty
//! 3. Fetch and parse the file's unified diff
//! 4. Align the versions and print them as text or JSON

mod display;

#[cfg(test)]
mod tests;

use crate::cli::SideBySideArgs;
use crate::config::OutputFormat;
use crate::config::types::MIN_COLUMN_WIDTH;
use crate::diff::{changed_files, file_content, file_diff, normalize_path};
use crate::error::{DiffcovError, Result};
use crate::side_by_side::{SideBySideLine, build_side_by_side};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use super::{Session, diff_lines_for, print_json};

use display::render_rows;

/// JSON output of the command.
#[derive(Debug, Serialize)]
pub struct SideBySideView {
    pub old_revision: String,
    pub new_revision: String,
    pub old_path: String,
    pub path: String,
    pub rows: Vec<SideBySideLine>,
}

/// Execute the `diffcov side-by-side` command.
pub fn cmd_side_by_side(repo: Option<&Path>, args: SideBySideArgs) -> Result<()> {
    let session = Session::open(repo, &args.revisions)?;
    let format = args.format.unwrap_or(session.config.output_format);
    let width = args.width.unwrap_or(session.config.column_width);

    if width < MIN_COLUMN_WIDTH {
        return Err(DiffcovError::UserError(format!(
            "--width must be at least {} (found {})",
            MIN_COLUMN_WIDTH, width
        )));
    }

    let view = build_view(&session, &args.revisions.old, &args.revisions.new, &args.path)?;
    info!(path = %view.path, rows = view.rows.len(), "built side-by-side view");

    match format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Text => {
            println!(
                "{} ({}) -> {} ({})",
                view.old_path, view.old_revision, view.path, view.new_revision
            );
            for line in render_rows(&view.rows, width as usize) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Build the aligned view of `path` between two revisions.
///
/// # Errors
///
/// Returns a `UserError` when the file exists at neither revision.
pub fn build_view(session: &Session, old: &str, new: &str, path: &str) -> Result<SideBySideView> {
    let root = &session.ctx.repo_root;
    let path = normalize_path(path);

    // Follow a rename so the old side shows the file's previous content
    let old_path = changed_files(root, old, new, true)?
        .into_iter()
        .find(|file| file.path == path)
        .and_then(|file| file.status.previous_path().map(str::to_string))
        .unwrap_or_else(|| path.clone());
    debug!(%old_path, %path, "resolved file paths");

    let old_lines = file_content(root, old, &old_path)?;
    let new_lines = file_content(root, new, &path)?;
    if old_lines.is_none() && new_lines.is_none() {
        return Err(DiffcovError::UserError(format!(
            "'{}' does not exist at {} or {}",
            path, old, new
        )));
    }

    let mut paths = vec![path.as_str()];
    if old_path != path {
        paths.insert(0, old_path.as_str());
    }
    let patch = file_diff(root, old, new, &paths, session.config.context_lines)?;
    let diff_lines = diff_lines_for(&patch, &path);

    let rows = build_side_by_side(
        &old_lines.unwrap_or_default(),
        &new_lines.unwrap_or_default(),
        &diff_lines,
    );

    Ok(SideBySideView {
        old_revision: old.to_string(),
        new_revision: new.to_string(),
        old_path,
        path,
        rows,
    })
}
