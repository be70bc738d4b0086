//! Configuration management for the NYT API client.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "NYT_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upstream API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API key; when unset the `NYT_API_KEY` environment variable is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Movie reviews API base URL
    pub movies_base_url: String,

    /// Books API base URL
    pub books_base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            movies_base_url: "https://api.nytimes.com/svc/movies/v2".to_string(),
            books_base_url: "https://api.nytimes.com/svc/books/v3".to_string(),
            timeout_secs: 30,
            user_agent: concat!("nyt-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl ApiConfig {
    /// Resolve the API key: the configured value first, then `NYT_API_KEY`.
    ///
    /// Empty strings count as absent in both places.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Load configuration from a TOML file or create default if not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            Self::default()
        })
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.api.movies_base_url,
            "https://api.nytimes.com/svc/movies/v2"
        );
        assert_eq!(config.api.books_base_url, "https://api.nytimes.com/svc/books/v3");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.api_key.is_none());
        assert_eq!(config.logging.default_level, "info");
    }

    #[test]
    fn test_save_and_load_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut original_config = Config::default();
        original_config.api.api_key = Some("secret".to_string());
        original_config.api.timeout_secs = 5;
        original_config.save(&config_path)?;

        assert!(config_path.exists());

        let loaded_config = Config::from_file(&config_path)?;
        assert_eq!(loaded_config.api.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded_config.api.timeout_secs, 5);
        assert_eq!(
            loaded_config.api.movies_base_url,
            original_config.api.movies_base_url
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        // Should return default config without error
        assert_eq!(config.logging.log_dir, "logs");
    }

    #[test]
    fn test_partial_config_uses_section_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[logging]
log_dir = "/var/log/nyt"
default_level = "debug"
console = false
file = true
json_format = true
"#,
        )?;

        let config = Config::from_file(&config_path)?;
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/nyt"));
        assert!(config.logging.json_format);
        assert_eq!(config.api.timeout_secs, 30);

        Ok(())
    }

    #[test]
    fn test_malformed_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[api\nbroken")?;

        assert!(Config::from_file(&config_path).is_err());
        assert!(Config::load_or_default(&config_path).api.api_key.is_none());

        Ok(())
    }

    #[test]
    fn test_configured_key_wins_over_environment() {
        let api = ApiConfig {
            api_key: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(api.resolve_api_key().as_deref(), Some("from-config"));
    }
}
