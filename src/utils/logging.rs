//! Structured logging setup.
//!
//! The library only emits `tracing` events. This module installs the
//! subscriber for the command-line tool, writing to stderr so that stdout
//! stays reserved for the JSON payload.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{InlineError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs.
/// - `pretty`: Human-readable multi-line output.
/// - `compact` (default): One line per event.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        "pretty" => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.map_err(|e| InlineError::Config(format!("failed to install logger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
