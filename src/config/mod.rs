// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{InlineError, Result};
use crate::models::{Defaults, ParseMode};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `TGCACHED_DEFAULTS__PARSE_MODE=HTML`.
pub const ENV_PREFIX: &str = "TGCACHED";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file at `~/.tgcached/config.toml`
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(&Self::default_config_path()))
    }

    /// Same layering as [`AppConfig::load`] with an explicit config file.
    /// A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| InlineError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| InlineError::Config(e.to_string()))
    }

    /// Serialization defaults described by this configuration.
    pub fn defaults(&self) -> Result<Defaults> {
        let parse_mode = self
            .defaults
            .parse_mode
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<ParseMode>)
            .transpose()?;

        Ok(Defaults { parse_mode })
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tgcached")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_parse_mode() {
        let config = AppConfig::default();
        assert_eq!(config.defaults().unwrap(), Defaults::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_defaults_reject_unknown_parse_mode() {
        let mut config = AppConfig::default();
        config.defaults.parse_mode = Some("rtf".to_string());
        assert!(matches!(config.defaults(), Err(InlineError::InvalidParseMode(_))));
    }

    #[test]
    fn test_blank_parse_mode_means_none() {
        let mut config = AppConfig::default();
        config.defaults.parse_mode = Some("  ".to_string());
        assert_eq!(config.defaults().unwrap().parse_mode, None);
    }
}
