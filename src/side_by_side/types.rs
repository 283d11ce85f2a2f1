//! Row types of a side-by-side view.

use serde::Serialize;

/// What one side of a row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SideKind {
    /// Unchanged line (also used for regions the diff omitted).
    Context,
    /// Line only in the new file.
    Added,
    /// Line only in the old file.
    Deleted,
    /// Padding opposite a pure insertion or deletion; no number, empty content.
    Placeholder,
}

/// One row of the two-column view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SideBySideLine {
    pub left_line_number: Option<usize>,
    pub left_content: String,
    pub left_kind: SideKind,
    pub right_line_number: Option<usize>,
    pub right_content: String,
    pub right_kind: SideKind,
}

impl SideBySideLine {
    /// A row showing the same unchanged line on both sides.
    pub fn context(
        left: usize,
        left_content: impl Into<String>,
        right: usize,
        right_content: impl Into<String>,
    ) -> Self {
        Self {
            left_line_number: Some(left),
            left_content: left_content.into(),
            left_kind: SideKind::Context,
            right_line_number: Some(right),
            right_content: right_content.into(),
            right_kind: SideKind::Context,
        }
    }

    /// Build a row from two optional sides; a missing side becomes a placeholder.
    pub fn from_sides(left: Option<Side>, right: Option<Side>) -> Self {
        let left = left.unwrap_or_else(Side::placeholder);
        let right = right.unwrap_or_else(Side::placeholder);
        Self {
            left_line_number: left.line_number,
            left_content: left.content,
            left_kind: left.kind,
            right_line_number: right.line_number,
            right_content: right.content,
            right_kind: right.kind,
        }
    }

    /// Whether either side is an addition or deletion.
    pub fn is_change(&self) -> bool {
        self.left_kind != SideKind::Context || self.right_kind != SideKind::Context
    }
}

/// One half of a row, used while assembling rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub line_number: Option<usize>,
    pub content: String,
    pub kind: SideKind,
}

impl Side {
    pub fn new(line_number: usize, content: impl Into<String>, kind: SideKind) -> Self {
        Self {
            line_number: Some(line_number),
            content: content.into(),
            kind,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            line_number: None,
            content: String::new(),
            kind: SideKind::Placeholder,
        }
    }
}
