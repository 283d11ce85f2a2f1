//! Branch header extraction for C0 coverage.
//!
//! Re-runs the masked brace pass over a file and reports the `if`,
//! `else if`, `else`, `switch`, `case` and `default` branches whose range
//! contains a changed line.

mod condition;
mod extractor;
mod header;


pub use condition::{extract_condition, extract_label};
pub use extractor::{BranchInfo, extract_branches};
pub use header::{BranchHeader, BranchKind, HeaderMatch, has_inline_statement, scan_headers};
