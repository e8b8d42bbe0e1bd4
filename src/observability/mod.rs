//! Logging initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over the configured level. Stdout is left to
/// the caller for machine-readable output.
pub fn init_observability(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format.as_str() {
        "json" => registry.with(layer.json()).init(),
        "compact" => registry.with(layer.compact()).init(),
        _ => registry.with(layer.pretty()).init(),
    }
}
