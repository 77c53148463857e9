//! Structured logging setup for infraprobe

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize JSON logging (for scripted/CI probe runs)
///
/// Logs go to stderr; stdout is reserved for probe results so the output
/// stays machine-consumable.
pub fn init_logging(service_name: &str, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    tracing::debug!(service = service_name, "Logging initialized");
}

/// Initialize human-readable console logging (default for interactive use)
///
/// Same stderr rule as the JSON flavor.
pub fn init_console_logging(service_name: &str, default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    tracing::debug!(service = service_name, "Console logging initialized");
}
