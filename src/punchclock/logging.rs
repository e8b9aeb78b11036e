//! Diagnostics go to stderr through `tracing`.
//!
//! Filter precedence: `PUNCHCLOCK_LOG`, then `debug` when verbose, then `warn`.
//! Stdout stays reserved for command output.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "PUNCHCLOCK_LOG";

pub fn filter_for(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let _ = fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
