//! Logging setup for the command line host.
//!
//! Logs go to stderr so they do not interleave with draw output on stdout.
//! Set `DEBUG_LOGGING=1` to enable debug output for the onair crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install the global subscriber. Call once, before the first refresh.
pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,onair=debug,onair_cli=debug,onair_core=debug,onair_overlay=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(EnvFilter::new(filter_directive))
        .init();

    tracing::debug!(debug_logging, "ON AIR logging initialized");
}
