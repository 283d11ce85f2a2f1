//! Implementation of the `diffcov files` command.

use crate::cli::RevisionArgs;
use crate::config::OutputFormat;
use crate::diff::{ChangedFile, changed_files};
use crate::error::Result;
use std::path::Path;
use tracing::info;

use super::{Session, print_json};

/// Execute the `diffcov files` command.
///
/// Lists every file that differs between the two revisions, one per line
/// with its status letter, or as a JSON array when the config's
/// `output_format` is `json`.
pub fn cmd_files(repo: Option<&Path>, args: RevisionArgs) -> Result<()> {
    let session = Session::open(repo, &args)?;
    let files = changed_files(
        &session.ctx.repo_root,
        &args.old,
        &args.new,
        session.config.detect_renames,
    )?;
    info!(count = files.len(), old = %args.old, new = %args.new, "listed changed files");

    match session.config.output_format {
        OutputFormat::Json => print_json(&files),
        OutputFormat::Text => {
            if files.is_empty() {
                println!("No files changed between {} and {}.", args.old, args.new);
            }
            for file in &files {
                println!("{}", format_changed_file(file));
            }
            Ok(())
        }
    }
}

/// One line of text output, e.g. `M  src/Calc.cs` or `R  Old.cs -> New.cs`.
pub fn format_changed_file(file: &ChangedFile) -> String {
    match file.status.previous_path() {
        Some(from) => format!("{:<2} {} -> {}", file.status.letter(), from, file.path),
        None => format!("{:<2} {}", file.status.letter(), file.path),
    }
}
