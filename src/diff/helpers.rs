//! Helper functions for diff parsing.

use crate::error::{DiffcovError, Result};

use super::types::HunkHeader;

/// Path git prints for the missing side of an added or deleted file.
pub(crate) const NULL_PATH: &str = "/dev/null";

/// Split text into lines, tolerating CRLF line endings.
///
/// A trailing `'\r'` is stripped from every line, including a final line
/// that has no terminating newline.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Parse the two paths from the remainder of a "diff --git" line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "a/my file.rs b/my file.rs" (paths with spaces)
///
/// Returns `(a_path, b_path)`, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<(String, String)> {
    // Paths can contain spaces; " b/" separates the two halves. Use the last
    // occurrence in case the a/ path itself contains " b/".
    let b_pos = rest.rfind(" b/")?;
    let a_part = &rest[..b_pos];
    let b_part = &rest[b_pos + 3..];

    let a_path = a_part.strip_prefix("a/").unwrap_or(a_part);
    Some((normalize_path(a_path), normalize_path(b_part)))
}

/// Parse the path from the remainder of a `---` or `+++` line.
///
/// Strips the `a/`/`b/` prefix and any tab-separated timestamp. Returns
/// `None` for `/dev/null`.
pub(super) fn parse_marker_path(rest: &str) -> Option<String> {
    let path = rest.split('\t').next().unwrap_or(rest).trim_end();
    if path == NULL_PATH {
        return None;
    }

    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    Some(normalize_path(path))
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_len +new_start,new_len @@" or "@@ -old_start +new_start @@"
/// Also handles: "@@ -old_start,old_len +new_start,new_len @@ context info"
///
/// Returns `DiffcovError::MalformedHunkHeader` if the ranges cannot be parsed.
pub fn parse_hunk_header(line: &str) -> Result<HunkHeader> {
    let malformed = || DiffcovError::MalformedHunkHeader(line.to_string());

    // Remove leading "@@ " and trailing " @@" (with optional context)
    let rest = line.strip_prefix("@@ ").ok_or_else(malformed)?;
    let end_marker = rest.find(" @@").ok_or_else(malformed)?;
    let range_part = &rest[..end_marker];

    let parts: Vec<&str> = range_part.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(malformed());
    }

    let old_part = parts[0].strip_prefix('-').ok_or_else(malformed)?;
    let new_part = parts[1].strip_prefix('+').ok_or_else(malformed)?;

    let (old_start, old_len) = parse_range(old_part).ok_or_else(malformed)?;
    let (new_start, new_len) = parse_range(new_part).ok_or_else(malformed)?;

    Ok(HunkHeader {
        old_start,
        old_len,
        new_start,
        new_len,
    })
}

/// Parse a range specification.
///
/// Format: "start" or "start,len"; a missing length means 1.
fn parse_range(range: &str) -> Option<(usize, usize)> {
    match range.split_once(',') {
        Some((start, len)) => Some((start.parse().ok()?, len.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Normalize a file path to use forward slashes.
///
/// This ensures consistent path format for glob matching,
/// regardless of the platform where the diff was generated.
pub(crate) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
