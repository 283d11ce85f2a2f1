//! Implementation of the `diffcov cases` command.
//!
//! For every changed file selected by the config globs (or named on the
//! command line):
//! 1. Fetch the file at the new revision
//! 2. Derive its changed lines from the file's diff (every line for an added file)
//! 3. Generate the C0 cases for branches touching those lines
//!
//! Deleted files have no new content and are skipped.

mod display;


use crate::cli::CasesArgs;
use crate::config::OutputFormat;
use crate::coverage::{CaseReport, FileCases, generate_c0_cases};
use crate::diff::{
    ChangedFile, FileStatus, all_lines, changed_files, changed_lines, file_content, file_diff,
    normalize_path,
};
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info, warn};

use super::{Session, diff_lines_for, print_json};

use display::print_report;

/// Execute the `diffcov cases` command.
pub fn cmd_cases(repo: Option<&Path>, args: CasesArgs) -> Result<()> {
    let session = Session::open(repo, &args.revisions)?;
    let format = args.format.unwrap_or(session.config.output_format);

    let report = collect_report(
        &session,
        &args.revisions.old,
        &args.revisions.new,
        &args.paths,
    )?;
    info!(
        files = report.files.len(),
        cases = report.case_count(),
        "generated C0 cases"
    );

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print_report(&report);
            Ok(())
        }
    }
}

/// Generate the cases for every selected file between two revisions.
///
/// # Arguments
///
/// * `session` - Resolved repository and config
/// * `old` / `new` - The revisions being compared
/// * `paths` - Explicit repo-relative paths; empty selects every changed file
///   matching the config globs
///
/// # Returns
///
/// A report with one entry per selected file that still exists at `new`,
/// in the order git lists the files. Files without cases are kept with an
/// empty case list.
pub fn collect_report(
    session: &Session,
    old: &str,
    new: &str,
    paths: &[String],
) -> Result<CaseReport> {
    let root = &session.ctx.repo_root;
    let changed = changed_files(root, old, new, session.config.detect_renames)?;
    let selected = select_files(session, changed, paths)?;

    let mut files = Vec::new();
    for file in selected {
        if file.status == FileStatus::Deleted {
            debug!(path = %file.path, "skipping deleted file");
            continue;
        }

        let Some(lines) = file_content(root, new, &file.path)? else {
            warn!(path = %file.path, revision = %new, "file missing at new revision");
            continue;
        };

        let changed_line_numbers = if file.status == FileStatus::Added {
            all_lines(lines.len())
        } else {
            let mut diff_paths = vec![file.path.as_str()];
            if let Some(previous) = file.status.previous_path() {
                diff_paths.insert(0, previous);
            }
            let patch = file_diff(root, old, new, &diff_paths, session.config.context_lines)?;
            changed_lines(&diff_lines_for(&patch, &file.path))
        };

        let cases = generate_c0_cases(&lines.join("\n"), &changed_line_numbers);
        debug!(
            path = %file.path,
            changed = changed_line_numbers.len(),
            cases = cases.len(),
            "processed file"
        );

        files.push(FileCases {
            path: file.path,
            cases,
        });
    }

    Ok(CaseReport::new(old, new, files))
}

/// Pick the files to analyse: the named paths when given, else the changed
/// files the config globs accept.
fn select_files(
    session: &Session,
    changed: Vec<ChangedFile>,
    paths: &[String],
) -> Result<Vec<ChangedFile>> {
    if paths.is_empty() {
        let filter = session.config.file_filter()?;
        return Ok(changed
            .into_iter()
            .filter(|file| filter.is_match(&file.path))
            .collect());
    }

    let mut selected = Vec::new();
    for path in paths.iter().map(|path| normalize_path(path)) {
        match changed.iter().find(|file| file.path == path) {
            Some(file) => selected.push(file.clone()),
            None => warn!(%path, "not changed between the revisions; skipping"),
        }
    }
    Ok(selected)
}
