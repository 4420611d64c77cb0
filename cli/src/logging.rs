//! Logging configuration.
//!
//! Stdout-only tracing output. Set `DEBUG_LOGGING=1` to enable debug
//! output for alehp crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        "info,alehp_core=debug,alehp_cli=debug"
    } else {
        "info"
    };

    let filter = EnvFilter::new(filter_directive);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "logging initialized");
}
