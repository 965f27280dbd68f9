//! Logging setup using the tracing ecosystem
//!
//! Logs go to stderr so query output on stdout stays pipeable.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> String {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    format!("partpromo={}", level)
}

/// Install the global subscriber; `RUST_LOG` overrides the flags
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
