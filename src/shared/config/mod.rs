//! Application configuration module
//!
//! Provides the server's runtime settings: where to listen, where the viewer's
//! static assets live, and where architectures are saved.

use std::path::PathBuf;
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default static asset directory
pub const DEFAULT_STATIC_DIR: &str = "build/static";

/// Default save root
pub const DEFAULT_SAVE_DIR: &str = "saves";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Directory holding the viewer's assets; `html/` inside it is served at `/`
    pub static_dir: PathBuf,
    /// Save root: one subdirectory per architecture ID
    pub save_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        if self.save_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("save_dir"));
        }
        if self.static_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("static_dir"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    save_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the static asset directory
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Set the save root
    pub fn save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            static_dir: self.static_dir.unwrap_or(defaults.static_dir),
            save_dir: self.save_dir.unwrap_or(defaults.save_dir),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(u16),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.save_dir, PathBuf::from("saves"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::builder()
            .port(3000)
            .static_dir("/srv/ennoea")
            .save_dir("/var/lib/ennoea")
            .build()
            .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("/srv/ennoea"));
        assert_eq!(config.save_dir, PathBuf::from("/var/lib/ennoea"));
    }

    #[test]
    fn test_rejects_empty_save_dir() {
        let err = AppConfig::builder().save_dir("").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingValue("save_dir"));
    }

    #[test]
    fn test_rejects_port_zero() {
        let err = AppConfig::builder().port(0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(0));
    }
}
