use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why a config file could not be turned into a usable [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid countrylens TOML: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid `{field}` in config: {message}")]
    ValidationError {
        field: &'static str,
        message: &'static str,
    },
}

impl Config {
    /// `<config dir>/countrylens/config.toml`, or `None` on platforms where
    /// `dirs` knows no config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("countrylens").join("config.toml"))
    }

    /// Load the user's config file, or the built-in defaults when there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load `path`. A missing file means "no overrides" and yields the
    /// defaults; anything else must parse and pass [`Config::validate`].
    /// Sections and keys left out of the file keep their default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the source or the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, message| Err(ConfigError::ValidationError { field, message });

        if self.source.base_url.trim().is_empty() {
            return invalid("source.base_url", "must not be empty");
        }
        if self.source.timeout_seconds == 0 {
            return invalid("source.timeout_seconds", "must be greater than 0");
        }
        if self.source.connect_timeout_seconds == 0 {
            return invalid("source.connect_timeout_seconds", "must be greater than 0");
        }
        if self.view.page_size == 0 {
            return invalid("view.page_size", "must be greater than 0");
        }
        Ok(())
    }
}
