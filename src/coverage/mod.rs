//! C0 (branch) coverage case generation.

mod generator;
mod types;


pub use generator::{generate_c0_cases, generate_cases};
pub use types::{C0TestCase, CaseReport, FileCases};
