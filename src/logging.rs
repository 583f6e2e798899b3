//! # Logging Initialization
//!
//! Console tracing setup for the CLI. Verbosity comes from the `-v` flag
//! count, overridable via `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Verbosity levels: 0 = info, 1 = debug, 2+ = trace, scoped to this crate;
/// dependencies stay at warn unless `RUST_LOG` says otherwise.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,medflow_client={level}")));

    // try_init so tests that already installed a subscriber don't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
