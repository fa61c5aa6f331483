//! Diagnostic tracing for the command-line adapter.
//!
//! Rendered mission output goes to stdout; tracing goes to stderr so the two
//! never interleave on the same stream.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. Use `RUST_LOG=mars_rover=info` to
/// see the parsed mission and every executed command batch.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
