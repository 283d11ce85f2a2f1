//! Reconstruction of a full two-column view from a sparse diff.

use crate::diff::{DiffLine, DiffLineKind, parse_hunk_header};

use super::types::{Side, SideBySideLine, SideKind};

/// Build the side-by-side view of a whole file.
///
/// `old_lines` and `new_lines` are the complete file contents (pass an
/// empty slice for a file absent at that revision). `diff_lines` is the
/// parsed diff of the same file. The unified diff only carries a few lines
/// of context around each change; the regions it omits are copied from the
/// full file arrays, so every line of both files appears exactly once on its
/// side and the output has at least `max(old_lines.len(), new_lines.len())`
/// rows.
///
/// Within a change block, deleted lines are paired with the added lines that
/// follow them; the shorter run is padded with placeholder rows.
///
/// # Example
///
/// ```
/// use diffcov::diff::parse_unified_diff;
/// use diffcov::side_by_side::build_side_by_side;
///
/// let old = vec!["a".to_string(), "c".to_string()];
/// let new = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let diff = parse_unified_diff("@@ -1,2 +1,3 @@\n a\n+b\n c\n");
///
/// let rows = build_side_by_side(&old, &new, &diff);
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1].left_line_number, None);
/// assert_eq!(rows[1].right_content, "b");
/// ```
pub fn build_side_by_side(
    old_lines: &[String],
    new_lines: &[String],
    diff_lines: &[DiffLine],
) -> Vec<SideBySideLine> {
    let mut aligner = Aligner::new(old_lines, new_lines);

    let mut index = 0;
    while index < diff_lines.len() {
        let line = &diff_lines[index];
        match line.kind {
            DiffLineKind::Hunk => {
                aligner.enter_hunk(&line.content);
                index += 1;
            }
            DiffLineKind::Context => {
                aligner.context(line);
                index += 1;
            }
            DiffLineKind::Deleted | DiffLineKind::Added => {
                let deleted = run_of(diff_lines, index, DiffLineKind::Deleted);
                let added = run_of(diff_lines, index + deleted.len(), DiffLineKind::Added);
                index += deleted.len() + added.len();
                aligner.change_block(deleted, added);
            }
        }
    }

    aligner.finish()
}

/// The maximal run of `kind` lines starting at `start`.
fn run_of(lines: &[DiffLine], start: usize, kind: DiffLineKind) -> &[DiffLine] {
    let len = lines[start..]
        .iter()
        .take_while(|line| line.kind == kind)
        .count();
    &lines[start..start + len]
}

/// Cursor state over both files. Positions are the next 1-based line not yet emitted.
struct Aligner<'a> {
    old: &'a [String],
    new: &'a [String],
    old_pos: usize,
    new_pos: usize,
    rows: Vec<SideBySideLine>,
}

impl<'a> Aligner<'a> {
    fn new(old: &'a [String], new: &'a [String]) -> Self {
        Self {
            old,
            new,
            old_pos: 1,
            new_pos: 1,
            rows: Vec::new(),
        }
    }

    fn enter_hunk(&mut self, header: &str) {
        // The parser only emits headers it could parse
        let Ok(header) = parse_hunk_header(header) else {
            return;
        };

        // A zero-length range names the line before the hunk
        let old_target = header.old_start + usize::from(header.old_len == 0);
        let new_target = header.new_start + usize::from(header.new_len == 0);
        self.backfill(old_target, new_target);
    }

    fn context(&mut self, line: &DiffLine) {
        let (Some(old), Some(new)) = (line.old_line_number, line.new_line_number) else {
            return;
        };
        if !self.is_unseen_old(old) || !self.is_unseen_new(new) {
            return;
        }

        self.backfill(old, new);
        self.rows
            .push(SideBySideLine::context(old, &line.content, new, &line.content));
        self.old_pos = self.old_pos.max(old + 1);
        self.new_pos = self.new_pos.max(new + 1);
    }

    fn change_block(&mut self, deleted: &[DiffLine], added: &[DiffLine]) {
        let old_target = deleted
            .first()
            .and_then(|line| line.old_line_number)
            .unwrap_or(self.old_pos);
        let new_target = added
            .first()
            .and_then(|line| line.new_line_number)
            .unwrap_or(self.new_pos);
        self.backfill(old_target, new_target);

        for offset in 0..deleted.len().max(added.len()) {
            let left = deleted.get(offset).and_then(|line| {
                let number = line.old_line_number.filter(|&n| self.is_unseen_old(n))?;
                self.old_pos = number + 1;
                Some(Side::new(number, &line.content, SideKind::Deleted))
            });
            let right = added.get(offset).and_then(|line| {
                let number = line.new_line_number.filter(|&n| self.is_unseen_new(n))?;
                self.new_pos = number + 1;
                Some(Side::new(number, &line.content, SideKind::Added))
            });
            if left.is_some() || right.is_some() {
                self.rows.push(SideBySideLine::from_sides(left, right));
            }
        }
    }

    /// A line of the old file not yet emitted. Numbers past the end of the
    /// file or behind the cursor come from a diff that does not match it.
    fn is_unseen_old(&self, number: usize) -> bool {
        number >= self.old_pos && number <= self.old.len()
    }

    fn is_unseen_new(&self, number: usize) -> bool {
        number >= self.new_pos && number <= self.new.len()
    }

    /// Emit the unchanged lines before `old_target` / `new_target` from the full files.
    ///
    /// Lines are paired while both sides have some left; any remainder is
    /// emitted one-sided. Targets behind a cursor emit nothing.
    fn backfill(&mut self, old_target: usize, new_target: usize) {
        let old_target = old_target.min(self.old.len() + 1);
        let new_target = new_target.min(self.new.len() + 1);

        while self.old_pos < old_target && self.new_pos < new_target {
            self.rows.push(SideBySideLine::context(
                self.old_pos,
                &self.old[self.old_pos - 1],
                self.new_pos,
                &self.new[self.new_pos - 1],
            ));
            self.old_pos += 1;
            self.new_pos += 1;
        }

        while self.old_pos < old_target {
            let left = Side::new(self.old_pos, &self.old[self.old_pos - 1], SideKind::Context);
            self.rows.push(SideBySideLine::from_sides(Some(left), None));
            self.old_pos += 1;
        }

        while self.new_pos < new_target {
            let right = Side::new(self.new_pos, &self.new[self.new_pos - 1], SideKind::Context);
            self.rows.push(SideBySideLine::from_sides(None, Some(right)));
            self.new_pos += 1;
        }
    }

    /// Flush the unchanged tail after the last hunk.
    fn finish(mut self) -> Vec<SideBySideLine> {
        self.backfill(self.old.len() + 1, self.new.len() + 1);
        self.rows
    }
}
