//! Tracing and logging (shared setup).

/// Environment-driven configuration.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let (config, rejected) = match ObservabilityConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (ObservabilityConfig::default(), Some(err)),
    };

    tracing::init(&config);

    if let Some(err) = rejected {
        ::tracing::warn!("invalid logging configuration, using defaults: {err}");
    }
}
