//! Exit code constants for the diffcov CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, not a repository, unknown revision, bad config)
//! - 2: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown revision, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: a git subprocess could not run or exited non-zero.
pub const GIT_FAILURE: i32 = 2;
