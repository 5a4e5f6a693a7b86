//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so command output on stdout stays clean. The
//! level comes from `LEDGER_LOG` (or `RUST_LOG`), defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "LEDGER_LOG";

/// Initialize tracing for the process.
///
/// `verbose` forces debug output for this crate regardless of the
/// environment. Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("little_ledger=debug,ledger=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
