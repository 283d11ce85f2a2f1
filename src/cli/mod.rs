//! CLI argument parsing for diffcov.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::OutputFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// diffcov: side-by-side diffs and C0 coverage cases between two revisions.
///
/// Compares two git revisions of a repository:
/// - lists the files that changed
/// - renders a whole file as an aligned two-column view
/// - lists the branch outcomes (C0 cases) that changed code must exercise
#[derive(Parser, Debug)]
#[command(name = "diffcov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in this directory.
    #[arg(short = 'C', long = "repo", global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffcov.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files changed between two revisions.
    ///
    /// Prints one status letter and path per file (renames as `old -> new`).
    Files(RevisionArgs),

    /// Show one file as an aligned side-by-side view.
    ///
    /// The whole file is shown, not just the diff hunks; unchanged regions
    /// are filled in from the file contents at each revision.
    SideBySide(SideBySideArgs),

    /// Generate C0 test cases for changed branches.
    ///
    /// Every `if`/`else if` touched by a change yields a true and a false
    /// case; `switch`, `case` and `default` yield one case each.
    Cases(CasesArgs),
}

/// The two revisions being compared.
#[derive(Args, Debug, Clone)]
pub struct RevisionArgs {
    /// Old revision (branch, tag, or commit).
    pub old: String,

    /// New revision (branch, tag, or commit).
    pub new: String,
}

/// Arguments for the `side-by-side` command.
#[derive(Args, Debug)]
pub struct SideBySideArgs {
    #[command(flatten)]
    pub revisions: RevisionArgs,

    /// Repo-relative path of the file (its path at the new revision).
    pub path: String,

    /// Output format (defaults to the config's `output_format`).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Column width for text output (defaults to the config's `column_width`).
    #[arg(long)]
    pub width: Option<u32>,
}

/// Arguments for the `cases` command.
#[derive(Args, Debug)]
pub struct CasesArgs {
    #[command(flatten)]
    pub revisions: RevisionArgs,

    /// Limit to these repo-relative paths (default: every changed file matching the config globs).
    pub paths: Vec<String>,

    /// Output format (defaults to the config's `output_format`).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
