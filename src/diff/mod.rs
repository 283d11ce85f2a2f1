//! Unified diff parsing for diffcov.
//!
//! This module turns `git diff` output into structured data:
//! - Per-line classification with old/new line numbers ([`parse_unified_diff`])
//! - Changed new-file line numbers for coverage ([`changed_lines`], [`all_lines`])
//! - Per-file sections of a multi-file patch ([`split_file_patches`])
//! - The git-backed collaborator calls ([`changed_files`], [`file_diff`], [`file_content`])
//!
//! Parsing is best-effort: a malformed hunk header is skipped with a warning
//! and never aborts the rest of the diff.

mod api;
mod changed;
mod helpers;
mod parser;
mod patch;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use api::{changed_files, file_content, file_diff, parse_name_status};
pub use changed::{all_lines, changed_lines};
pub use helpers::{parse_hunk_header, split_lines};
pub use parser::parse_unified_diff;
pub use patch::split_file_patches;
pub use types::{ChangedFile, DiffLine, DiffLineKind, FilePatch, FileStatus, HunkHeader};

pub(crate) use helpers::normalize_path;
