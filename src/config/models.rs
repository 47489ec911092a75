//! Configuration data structures for tgcached.
//!
//! This module defines the schema for the library-wide serialization
//! defaults and the logging settings used by the command-line tool.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Values applied to results at serialization time.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Library-wide defaults, in their textual configuration form.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Parse mode used when a result leaves its own unspecified
    /// (`Markdown`, `MarkdownV2`, `HTML`).
    /// Default: none
    #[serde(default)]
    pub parse_mode: Option<String>,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `warn`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `compact`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// stdout carries the JSON payload, keep logs quiet unless asked
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}
