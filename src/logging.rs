//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the defaults;
/// quiet runs only report errors.
pub fn init(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
