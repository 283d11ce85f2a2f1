//! Side-by-side alignment of two file versions.
//!
//! [`build_side_by_side`] combines the full old and new contents of a file
//! with its parsed unified diff and produces one row per displayed line pair.

mod aligner;
mod types;


pub use aligner::build_side_by_side;
pub use types::{Side, SideBySideLine, SideKind};
