//! Error types for diffcov.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffcov operations.
///
/// `MalformedHunkHeader` and `UnbalancedParenthesis` are produced by the
/// line-level helpers and always recovered by their callers; they never
/// abort a whole diff or file.
#[derive(Error, Debug)]
pub enum DiffcovError {
    /// User provided invalid arguments or the repository is in an unexpected state.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// Configuration file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A `@@ ... @@` line whose ranges could not be parsed.
    #[error("malformed hunk header: {0}")]
    MalformedHunkHeader(String),

    /// A branch condition whose parentheses do not close on its header line.
    #[error("unbalanced parenthesis in branch condition: {0}")]
    UnbalancedParenthesis(String),
}

impl DiffcovError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffcovError::UserError(_) => exit_codes::USER_ERROR,
            DiffcovError::GitError(_) => exit_codes::GIT_FAILURE,
            DiffcovError::ConfigError(_) => exit_codes::USER_ERROR,
            DiffcovError::MalformedHunkHeader(_) => exit_codes::USER_ERROR,
            DiffcovError::UnbalancedParenthesis(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for diffcov operations.
pub type Result<T> = std::result::Result<T, DiffcovError>;
