// Error types for tgcached
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InlineError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid result id: expected 1-64 bytes, got {len}")]
    InvalidResultId { len: usize },

    #[error("Invalid parse mode: {0}")]
    InvalidParseMode(String),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InlineError {
    /// Name of the offending field, for errors tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InlineError::MissingRequiredField { field }
            | InlineError::InvalidField { field, .. } => Some(field),
            InlineError::InvalidResultId { .. } => Some("id"),
            InlineError::InvalidParseMode(_) => Some("parse_mode"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InlineError>;
