//! Text rendering of side-by-side rows.

use crate::side_by_side::{SideBySideLine, SideKind};

const SEPARATOR: &str = " | ";

/// Render every row with columns of `width` chars.
pub fn render_rows(rows: &[SideBySideLine], width: usize) -> Vec<String> {
    rows.iter().map(|row| render_row(row, width)).collect()
}

/// Render one row: `  12 -old text  |   12 +new text`.
///
/// Content is cut to `width` chars; tabs are expanded to four spaces.
pub fn render_row(row: &SideBySideLine, width: usize) -> String {
    let left = render_side(row.left_line_number, &row.left_content, row.left_kind, width);
    let right = render_side(row.right_line_number, &row.right_content, row.right_kind, width);
    format!("{}{}{}", left, SEPARATOR, right.trim_end())
}

fn render_side(number: Option<usize>, content: &str, kind: SideKind, width: usize) -> String {
    let number = number.map(|n| n.to_string()).unwrap_or_default();
    let marker = match kind {
        SideKind::Added => '+',
        SideKind::Deleted => '-',
        SideKind::Context | SideKind::Placeholder => ' ',
    };
    let text: String = content.replace('\t', "    ").chars().take(width).collect();
    format!("{:>5} {}{:<width$}", number, marker, text, width = width)
}
