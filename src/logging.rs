//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; command results are printed
//! to stdout so JSON output stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the level chosen by `-v` flags.
pub const LOG_ENV: &str = "DIFFCOV_LOG";

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
