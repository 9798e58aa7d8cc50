//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence when set:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=unistyle=trace` - per-call engine traces
//!
//! Otherwise the level follows the `-v` count: warn, info, debug, trace.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
