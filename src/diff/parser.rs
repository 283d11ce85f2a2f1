//! Core diff parsing logic.

use tracing::warn;

use super::helpers::{parse_hunk_header, split_lines};
use super::types::DiffLine;

/// Line counters inside the current hunk.
#[derive(Debug, Clone, Copy)]
struct HunkCursor {
    old_line: usize,
    new_line: usize,
    /// Lines of each side the header says are still to come.
    old_left: usize,
    new_left: usize,
}

impl HunkCursor {
    fn take_old(&mut self) -> usize {
        let line = self.old_line;
        self.old_line += 1;
        self.old_left = self.old_left.saturating_sub(1);
        line
    }

    fn take_new(&mut self) -> usize {
        let line = self.new_line;
        self.new_line += 1;
        self.new_left = self.new_left.saturating_sub(1);
        line
    }

    fn has_context_left(&self) -> bool {
        self.old_left > 0 && self.new_left > 0
    }
}

/// Parse the unified diff of exactly one file into an ordered line sequence.
///
/// Lines before the first valid hunk header (`diff --git`, `index`, `---`,
/// `+++`, mode lines) are skipped. Every line inside a hunk becomes a
/// [`DiffLine`] carrying its old/new line numbers. A bare empty line is an
/// empty context line only while the header's counts leave room for one.
///
/// A hunk header whose ranges cannot be parsed is skipped with a warning,
/// along with the lines that follow it up to the next valid header. Lines
/// already parsed are kept; parsing never fails as a whole.
///
/// # Example
///
/// ```
/// use diffcov::diff::{parse_unified_diff, DiffLineKind};
///
/// let lines = parse_unified_diff("@@ -1,2 +1,3 @@\n a\n+b\n c\n");
/// assert_eq!(lines[0].kind, DiffLineKind::Hunk);
/// assert_eq!(lines[2].kind, DiffLineKind::Added);
/// assert_eq!(lines[2].new_line_number, Some(2));
/// ```
pub fn parse_unified_diff(patch_text: &str) -> Vec<DiffLine> {
    let mut result = Vec::new();
    let mut cursor: Option<HunkCursor> = None;

    for line in split_lines(patch_text) {
        if line.starts_with("@@") {
            match parse_hunk_header(&line) {
                Ok(header) => {
                    cursor = Some(HunkCursor {
                        old_line: header.old_start,
                        new_line: header.new_start,
                        old_left: header.old_len,
                        new_left: header.new_len,
                    });
                    result.push(DiffLine::hunk(line));
                }
                Err(err) => {
                    warn!("{}; skipping until the next hunk", err);
                    cursor = None;
                }
            }
            continue;
        }

        // Preamble before the first hunk, or the tail of a malformed one
        let Some(hunk) = cursor.as_mut() else {
            continue;
        };

        if let Some(content) = line.strip_prefix('+') {
            result.push(DiffLine::added(hunk.take_new(), content));
        } else if let Some(content) = line.strip_prefix('-') {
            result.push(DiffLine::deleted(hunk.take_old(), content));
        } else if let Some(content) = line.strip_prefix(' ') {
            result.push(DiffLine::context(hunk.take_old(), hunk.take_new(), content));
        } else if line.is_empty() && hunk.has_context_left() {
            // Some tools strip the single space of an empty context line.
            // Past the header's counts it is a separator, not a file line.
            result.push(DiffLine::context(hunk.take_old(), hunk.take_new(), ""));
        }
        // "\ No newline at end of file" and anything else is not a line of either file
    }

    result
}
