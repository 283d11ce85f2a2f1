//! Git command runner for diffcov.
//!
//! Provides a wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{DiffcovError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::trace;

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

fn spawn_git(cwd: &Path, args: &[&str]) -> Result<Output> {
    trace!(cwd = %cwd.display(), args = ?args, "running git");

    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffcovError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn failure(args: &[&str], output: &Output) -> DiffcovError {
    let git_output = GitOutput::from_output(output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    DiffcovError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    ))
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(DiffcovError::GitError)` - On non-zero exit code
///
/// # Examples
///
/// ```no_run
/// use diffcov::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["rev-parse", "HEAD"])?;
/// println!("HEAD is {}", output.stdout);
/// # Ok::<(), diffcov::error::DiffcovError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(GitOutput::from_output(&output))
    } else {
        Err(failure(args, &output))
    }
}

/// Run a git command and return its stdout untrimmed.
///
/// Patch text and file contents are whitespace-significant: a trailing
/// empty context line (`" "`) or leading indentation must survive.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<String> {
    let output = spawn_git(cwd.as_ref(), args)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(failure(args, &output))
    }
}

/// Check whether `git <args>` exits successfully, without treating failure as an error.
///
/// Only a failure to spawn git at all is reported as `Err`.
pub fn git_succeeds<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<bool> {
    let output = spawn_git(cwd.as_ref(), args)?;
    Ok(output.status.success())
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// This works from any location within a git repository.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DiffcovError::UserError)` - If not inside a git repository (exit code 1)
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let output = run_git_for_repo_detection(cwd.as_ref(), &["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(&output.stdout))
}

/// Resolve a revision expression to a full commit SHA.
///
/// An unknown revision is a user error (exit 1), not a git failure.
pub fn verify_revision<P: AsRef<Path>>(cwd: P, revision: &str) -> Result<String> {
    let spec = format!("{}^{{commit}}", revision);
    let output = spawn_git(cwd.as_ref(), &["rev-parse", "--verify", "--quiet", &spec])?;

    if output.status.success() {
        Ok(GitOutput::from_output(&output).stdout)
    } else {
        Err(DiffcovError::UserError(format!(
            "unknown revision '{}'.\n\n\
             Pass a branch name, tag, or commit SHA that exists in this repository.",
            revision
        )))
    }
}

/// Internal helper that returns a UserError instead of GitError for repo detection.
/// This ensures "not in a git repo" is a clean user error (exit 1) not a git error (exit 2).
fn run_git_for_repo_detection<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffcovError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let stderr = &git_output.stderr;
        if stderr.contains("not a git repository") || stderr.contains("fatal:") {
            Err(DiffcovError::UserError(
                "not inside a git repository. Run this command from within a git repository, \
                 or pass --repo <path>."
                    .to_string(),
            ))
        } else {
            Err(DiffcovError::UserError(format!(
                "git command failed: {}",
                if stderr.is_empty() {
                    &git_output.stdout
                } else {
                    stderr
                }
            )))
        }
    }
}
