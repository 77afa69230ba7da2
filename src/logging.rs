//! Diagnostic tracing for the checker.
//!
//! Stdout carries the `- ` failure lines a hook framework shows to the
//! operator, so diagnostics go to stderr and stay quiet unless `RUST_LOG`
//! asks for them.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, before the check runs.
///
/// `RUST_LOG=vgn_check=debug` shows every extracted version, submodule path
/// and recorded failure as it happens.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}
