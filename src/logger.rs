//! Tracing initialization. Diagnostics go to stderr only: stdout carries
//! the raw event stream and must never see a log line.

use crate::config::DEFAULT_LOG_FILTER;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber (fmt layer on stderr + env filter).
///
/// Runs before argument parsing so usage errors are reported the same way.
pub fn init_tracing(log_filter: &str) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(true);

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid RUST_LOG '{log_filter}': {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::registry().with(fmt_layer).with(filter).init();

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        // option_env! so builds outside a git checkout still work
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        log_filter = %log_filter,
        "evgrab starting"
    );
}
