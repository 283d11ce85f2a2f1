//! Class and method attribution for C-family source lines.
//!
//! Each line is masked so braces inside strings, char literals and comments
//! are ignored, then a brace-depth counter and a stack of open declarations
//! decide which class and method the line belongs to. The same masking is
//! reused by the branch extractor.

mod lexer;
mod patterns;
mod tracker;


pub use lexer::{Brace, LexState, Lexer, braces, mask_line};
pub use patterns::{Declaration, match_class, match_declaration, match_method};
pub use tracker::{ScopeEntry, ScopeFrame, ScopeKind, ScopeState, ScopeTracker, extract_scopes};
