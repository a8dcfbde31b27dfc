//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the advisor service, supporting
//! TOML files and environment-variable overrides with validation and
//! type-safe access to all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Command line arguments (highest priority, applied in `main`)
//! 2. Environment variables (`PFE_ADVISOR_*`)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use pfe_advisor::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Record dataset settings
    pub dataset: DatasetConfig,
    /// External completion service settings
    pub completion: CompletionConfig,
    /// Search behavior tuning
    pub search: SearchConfig,
    /// Logging and monitoring
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable CORS for browser front-ends
    pub enable_cors: bool,
}

/// Record dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the JSON record file
    pub path: PathBuf,
}

/// External completion service configuration (Gemini-style REST API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// API base URL
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// API key; usually supplied via PFE_ADVISOR_API_KEY
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

/// Search behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Row cap for "list all" answers
    pub max_list_results: usize,
    /// Number of profile-based suggestions returned
    pub max_profile_suggestions: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON-formatted log lines
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/projects.json"),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            request_timeout_seconds: 30,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_list_results: 20,
            max_profile_suggestions: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| AdvisorError::Config {
                message: format!("Failed to read config file {:?}: {}", path, e),
            })?;
            toml::from_str(&content).map_err(|e| AdvisorError::Config {
                message: format!("Failed to parse config file {:?}: {}", path, e),
            })?
        } else {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("PFE_ADVISOR_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PFE_ADVISOR_PORT") {
            self.server.port = port.parse().map_err(|_| AdvisorError::Config {
                message: "Invalid port number in PFE_ADVISOR_PORT".to_string(),
            })?;
        }
        if let Ok(path) = std::env::var("PFE_ADVISOR_DATASET") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Ok(api_key) = std::env::var("PFE_ADVISOR_API_KEY") {
            self.completion.api_key = Some(api_key);
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AdvisorError::Config {
                message: "server.port must be non-zero".to_string(),
            });
        }
        if self.search.max_profile_suggestions == 0 {
            return Err(AdvisorError::Config {
                message: "search.max_profile_suggestions must be at least 1".to_string(),
            });
        }
        if self.completion.request_timeout_seconds == 0 {
            return Err(AdvisorError::Config {
                message: "completion.request_timeout_seconds must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.search.max_profile_suggestions, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        // Untouched sections keep their defaults
        assert_eq!(config.completion.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 0").unwrap();

        assert!(Config::from_file(file.path()).is_err());
    }
}
