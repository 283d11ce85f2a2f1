//! Changed-line derivation from a parsed diff.

use std::collections::BTreeSet;

use super::types::{DiffLine, DiffLineKind};

/// New-file line numbers touched by `Added` lines.
///
/// Deleted lines have no position in the new file and contribute nothing;
/// a pure deletion therefore yields an empty set.
pub fn changed_lines(diff_lines: &[DiffLine]) -> BTreeSet<usize> {
    diff_lines
        .iter()
        .filter(|line| line.kind == DiffLineKind::Added)
        .filter_map(|line| line.new_line_number)
        .collect()
}

/// Every line of a brand-new file of `line_count` lines (`1..=line_count`).
pub fn all_lines(line_count: usize) -> BTreeSet<usize> {
    (1..=line_count).collect()
}
