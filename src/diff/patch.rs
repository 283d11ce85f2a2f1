//! Splitting multi-file `git diff` output into per-file patches.

use super::helpers::{parse_diff_git_line, parse_marker_path, split_lines};
use super::types::FilePatch;

/// Split multi-file diff output at its `diff --git` boundaries.
///
/// Paths come from the `diff --git` line and are refined by the `---`/`+++`
/// markers of each section (which report `/dev/null` for added and deleted
/// files). Text before the first `diff --git` line is ignored. Each section's
/// text can be handed to [`parse_unified_diff`](super::parse_unified_diff).
pub fn split_file_patches(diff_output: &str) -> Vec<FilePatch> {
    let mut patches = Vec::new();
    let mut current: Option<FilePatch> = None;
    let mut in_hunks = false;

    for line in split_lines(diff_output) {
        if let Some(rest) = line.strip_prefix("diff --git ") {
            patches.extend(current.take());

            let (old_path, new_path) = match parse_diff_git_line(rest) {
                Some((a, b)) => (Some(a), Some(b)),
                None => (None, None),
            };
            current = Some(FilePatch {
                old_path,
                new_path,
                text: String::new(),
            });
            in_hunks = false;
        }

        let Some(patch) = current.as_mut() else {
            continue;
        };

        // Before the first hunk, ---/+++ name the two sides. Inside a hunk
        // the same prefixes are ordinary deleted/added lines.
        if !in_hunks {
            if line.starts_with("@@") {
                in_hunks = true;
            } else if let Some(rest) = line.strip_prefix("--- ") {
                patch.old_path = parse_marker_path(rest);
            } else if let Some(rest) = line.strip_prefix("+++ ") {
                patch.new_path = parse_marker_path(rest);
            }
        }

        patch.text.push_str(&line);
        patch.text.push('\n');
    }

    patches.extend(current);
    patches
}
