//! Version-control collaborator calls backed by the git CLI.
//!
//! These are the only diff functions that touch the outside world; everything
//! else in this crate works on text they return.

use crate::error::Result;
use crate::git::{git_succeeds, run_git, run_git_raw};
use std::path::Path;
use tracing::debug;

use super::helpers::{normalize_path, split_lines};
use super::types::{ChangedFile, FileStatus};

/// Get the list of changed files between two revisions.
///
/// Runs `git diff --name-status [-M] {old} {new}` and returns repo-relative
/// file paths with forward slashes.
///
/// # Arguments
///
/// * `cwd` - A directory inside the repository
/// * `old` - The old revision
/// * `new` - The new revision
/// * `detect_renames` - Whether to pass `-M` so renames are paired
pub fn changed_files<P: AsRef<Path>>(
    cwd: P,
    old: &str,
    new: &str,
    detect_renames: bool,
) -> Result<Vec<ChangedFile>> {
    let mut args = vec!["diff", "--name-status", "--no-color"];
    if detect_renames {
        args.push("-M");
    } else {
        args.push("--no-renames");
    }
    args.push(old);
    args.push(new);

    let output = run_git(&cwd, &args)?;
    Ok(parse_name_status(&output.stdout))
}

/// Parse `git diff --name-status` output.
///
/// Formats:
/// - "M\tpath" / "A\tpath" / "D\tpath"
/// - "R087\told\tnew" / "C100\told\tnew"
///
/// Lines that do not match are skipped.
pub fn parse_name_status(output: &str) -> Vec<ChangedFile> {
    let mut files = Vec::new();

    for line in output.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        let Some(code) = fields.first().filter(|code| !code.is_empty()) else {
            continue;
        };

        let changed = match (code.chars().next(), fields.len()) {
            (Some('A'), 2) => ChangedFile {
                path: normalize_path(fields[1]),
                status: FileStatus::Added,
            },
            (Some('M'), 2) => ChangedFile {
                path: normalize_path(fields[1]),
                status: FileStatus::Modified,
            },
            (Some('D'), 2) => ChangedFile {
                path: normalize_path(fields[1]),
                status: FileStatus::Deleted,
            },
            (Some('R'), 3) => ChangedFile {
                path: normalize_path(fields[2]),
                status: FileStatus::Renamed {
                    from: normalize_path(fields[1]),
                },
            },
            (Some('C'), 3) => ChangedFile {
                path: normalize_path(fields[2]),
                status: FileStatus::Copied {
                    from: normalize_path(fields[1]),
                },
            },
            (Some(_), 2) => ChangedFile {
                path: normalize_path(fields[1]),
                status: FileStatus::Other {
                    code: code.to_string(),
                },
            },
            _ => continue,
        };
        files.push(changed);
    }

    files
}

/// Get the unified diff of one file between two revisions.
///
/// Runs `git diff --no-color --no-ext-diff -U{context_lines} {old} {new} -- {paths}`.
/// Pass both the old and new path for a rename so git pairs them. The result
/// may be empty (e.g. a pure rename).
pub fn file_diff<P: AsRef<Path>>(
    cwd: P,
    old: &str,
    new: &str,
    paths: &[&str],
    context_lines: u32,
) -> Result<String> {
    let unified = format!("-U{}", context_lines);
    let mut args = vec![
        "diff",
        "--no-color",
        "--no-ext-diff",
        "-M",
        unified.as_str(),
        old,
        new,
        "--",
    ];
    args.extend_from_slice(paths);

    run_git_raw(&cwd, &args)
}

/// Get a file's content at a revision, split into lines.
///
/// Returns `Ok(None)` when the file does not exist at that revision (added
/// later or deleted earlier). Content is decoded lossily as UTF-8 and
/// `'\r'` is stripped from every line.
pub fn file_content<P: AsRef<Path>>(
    cwd: P,
    revision: &str,
    path: &str,
) -> Result<Option<Vec<String>>> {
    let object = format!("{}:{}", revision, path);

    if !git_succeeds(&cwd, &["cat-file", "-e", &object])? {
        debug!(%object, "file absent at revision");
        return Ok(None);
    }

    let text = run_git_raw(&cwd, &["show", &object])?;
    Ok(Some(split_lines(&text)))
}
