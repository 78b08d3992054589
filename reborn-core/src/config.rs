//! Core configuration, read from `reborn_config.json5`.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/reborn_config.json5");

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file couldn't be read or the default couldn't be written.
    #[error("config io error: {0}")]
    Io(#[from] io::Error),
    /// The file isn't valid json5 or doesn't match [`CoreConfig`].
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The file parsed but a value is out of range.
    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}

/// Settings for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CoreConfig {
    /// The default log filter.
    pub log_level: String,
    /// Log every chunk event handed to listeners.
    pub log_listener_dispatch: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_listener_dispatch: false,
        }
    }
}

impl CoreConfig {
    /// Reads the config at `path`, or writes the default file there if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::parse(&fs::read_to_string(path)?)?;
            log::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Parses and validates config text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Checks values serde can't.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err("log_level must be one of off, error, warn, info, debug or trace");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_default() {
        assert_eq!(
            CoreConfig::parse(DEFAULT_CONFIG).expect("default config is valid"),
            CoreConfig::default()
        );
    }

    #[test]
    fn test_invalid_level() {
        let err = CoreConfig::parse(r#"{ log_level: "loud", log_listener_dispatch: false }"#)
            .expect_err("unknown level");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_field() {
        let err = CoreConfig::parse(r#"{ log_level: "info" }"#).expect_err("missing field");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_or_create() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config").join("reborn_config.json5");

        let created = CoreConfig::load_or_create(&path).expect("writes default");
        assert_eq!(created, CoreConfig::default());
        assert!(path.exists());

        fs::write(&path, r#"{ log_level: "DEBUG", log_listener_dispatch: true }"#)
            .expect("writable");
        let loaded = CoreConfig::load_or_create(&path).expect("reads file");
        assert_eq!(loaded.log_level, "DEBUG");
        assert!(loaded.log_listener_dispatch);
    }
}
