use std::io;

use configs::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info`
pub fn init_logging_default() {
    init_compact(DEFAULT_FILTER);
}

/// Initialize tracing subscriber with JSON structured output.
pub fn init_logging_json() {
    init_json(DEFAULT_FILTER);
}

/// Initialize tracing from the `[logging]` section of the app config.
pub fn init_logging(cfg: &LoggingConfig) {
    let fallback = cfg.filter.as_deref().unwrap_or(DEFAULT_FILTER);
    match cfg.format {
        LogFormat::Compact => init_compact(fallback),
        LogFormat::Json => init_json(fallback),
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

// try_init: a second call (e.g. from another test) is a no-op.
fn init_compact(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

fn init_json(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(fallback))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
