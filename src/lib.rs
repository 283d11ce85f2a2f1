//! diffcov: side-by-side diffs and C0 coverage cases between two git revisions.
//!
//! The analysis pipeline is pure and usable as a library:
//! - [`diff`] parses unified diffs and talks to git
//! - [`side_by_side`] aligns two file versions into rows
//! - [`scope`] attributes each source line to its class and method
//! - [`branch`] finds the branches touched by changed lines
//! - [`coverage`] turns those branches into C0 test cases
//!
//! [`cli`] and [`commands`] wire the pipeline to the `diffcov` binary.

pub mod branch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod coverage;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod scope;
pub mod side_by_side;

#[cfg(test)]
mod test_support;
