//! diffcov: side-by-side diffs and C0 coverage cases between two git revisions.
//!
//! This is the main entry point for the `diffcov` CLI. It parses arguments,
//! sets up diagnostics, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

use diffcov::cli::Cli;
use diffcov::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.repo.as_deref(), cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
