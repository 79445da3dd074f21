use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/feline-showcase/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Path of the persisted preference file.
    ///
    /// `[preferences] path` wins; otherwise `preferences.toml` in the
    /// application config directory.
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences
            .path
            .clone()
            .unwrap_or_else(|| config_dir().join("preferences.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The gallery has at least one image
    /// - Timer and fetch timeout durations are non-zero
    /// - The scroll domain is finite and positive, the parallax range finite
    ///   and non-negative
    /// - Name pool overrides, when present, are non-empty
    /// - The log level parses as filter directives
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.images.is_empty() {
            return Err(invalid("At least one gallery image must be configured"));
        }

        if self.timing.like_ack_ms == 0 {
            return Err(invalid("timing.like_ack_ms must be greater than zero"));
        }

        if self.timing.gallery_interval_ms == 0 {
            return Err(invalid("timing.gallery_interval_ms must be greater than zero"));
        }

        if self.fact.timeout_seconds == 0 {
            return Err(invalid("fact.timeout_seconds must be greater than zero"));
        }

        if self.fact.connect_timeout_seconds == 0 {
            return Err(invalid(
                "fact.connect_timeout_seconds must be greater than zero",
            ));
        }

        if !(self.scroll.domain.is_finite() && self.scroll.domain > 0.0) {
            return Err(invalid("scroll.domain must be a finite positive number"));
        }

        if !(self.scroll.parallax_max.is_finite() && self.scroll.parallax_max >= 0.0) {
            return Err(invalid(
                "scroll.parallax_max must be a finite non-negative number",
            ));
        }

        let pools = [
            ("honorifics", &self.names.honorifics),
            ("names", &self.names.names),
            ("suffixes", &self.names.suffixes),
        ];
        for (label, pool) in pools {
            if matches!(pool, Some(words) if words.is_empty()) {
                return Err(ConfigError::ValidationError {
                    message: format!("names.{} must not be empty", label),
                });
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError {
                message: format!("logging.level '{}' is invalid: {}", self.logging.level, e),
            });
        }

        Ok(())
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("feline-showcase")
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError {
        message: message.to_string(),
    }
}
