//! Configuration management for the `templeguide` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TempleGuideError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `templeguide` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempleGuideConfig {
    /// Dataset source configuration
    #[serde(default)]
    pub data: DataConfig,
    /// Favorites storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Dataset source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to a local dataset JSON document
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,
    /// URL of a hosted dataset JSON document, tried when no local file exists
    #[serde(default)]
    pub dataset_url: Option<String>,
    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u32,
}

/// Favorites storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the favorites keyspace
    #[serde(default = "default_storage_location")]
    pub location: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Nearby search radius in kilometers
    #[serde(default = "default_search_radius")]
    pub search_radius_km: f64,
    /// Maximum number of temples returned by nearby and deity queries
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Number of temples shown in the curated featured list
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

// Default value functions
fn default_dataset_path() -> String {
    "data/temples_with_location.json".to_string()
}

fn default_fetch_timeout() -> u32 {
    30
}

fn default_storage_location() -> String {
    "~/.local/share/templeguide".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_search_radius() -> f64 {
    10.0
}

fn default_max_results() -> usize {
    20
}

fn default_featured_count() -> usize {
    15
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            dataset_url: None,
            fetch_timeout_seconds: default_fetch_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            location: default_storage_location(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            search_radius_km: default_search_radius(),
            max_results: default_max_results(),
            featured_count: default_featured_count(),
        }
    }
}

impl Default for TempleGuideConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TempleGuideConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with TEMPLEGUIDE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TEMPLEGUIDE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TempleGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("templeguide").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TempleGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TempleGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.data.fetch_timeout_seconds == 0 || self.data.fetch_timeout_seconds > 300 {
            return Err(TempleGuideError::config(
                "Fetch timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if let Some(url) = &self.data.dataset_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TempleGuideError::config(
                    "Dataset URL must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        if self.defaults.search_radius_km <= 0.0 || self.defaults.search_radius_km > 500.0 {
            return Err(TempleGuideError::config(
                "Search radius must be between 0 and 500 km",
            )
            .into());
        }

        if self.defaults.max_results == 0 || self.defaults.max_results > 100 {
            return Err(TempleGuideError::config(
                "Maximum results must be between 1 and 100",
            )
            .into());
        }

        Ok(())
    }

    /// Favorites storage directory with `~` expanded
    #[must_use]
    pub fn storage_dir(&self) -> PathBuf {
        expand_home(&self.storage.location)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TempleGuideConfig::default();
        assert_eq!(config.data.dataset_path, "data/temples_with_location.json");
        assert_eq!(config.data.fetch_timeout_seconds, 30);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.search_radius_km, 10.0);
        assert_eq!(config.defaults.max_results, 20);
        assert!(config.data.dataset_url.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = TempleGuideConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TempleGuideConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_url() {
        let mut config = TempleGuideConfig::default();
        config.data.dataset_url = Some("ftp://example.com/data.json".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TempleGuideConfig::default();
        config.defaults.search_radius_km = 0.0;
        assert!(config.validate().is_err());

        let mut config = TempleGuideConfig::default();
        config.defaults.max_results = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_path_generation() {
        let path = TempleGuideConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("templeguide"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(expand_home("/tmp/guide"), PathBuf::from("/tmp/guide"));
    }
}
