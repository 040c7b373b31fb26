//! Configuration file parsing for the API server.
//!
//! Loads settings from TOML: bind address, the assistant section (endpoint,
//! space, authentication mode), and the optional facts CSV path. The
//! assistant's authentication mode is fixed here, once, at startup; there
//! is no environment sniffing at call sites.

use margin_assistant::{AssistantConfig, AuthMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// API server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g. "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g. 8000)
    pub bind_port: u16,

    /// Ground-truth facts CSV; when absent the server runs in demo mode on
    /// a synthetic fact table
    #[serde(default)]
    pub facts_csv: Option<PathBuf>,

    /// Hosted assistant settings
    pub assistant: AssistantConfig,
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&contents)?;
        config.assistant.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Create a default configuration for local testing
    pub fn default_test_config() -> Self {
        ApiConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            facts_csv: None,
            assistant: AssistantConfig {
                endpoint: "http://localhost:8089".to_string(),
                space_id: "pnl-demo".to_string(),
                auth: AuthMode::Token {
                    token: "dev-token-do-not-use-in-production".to_string(),
                },
                timeout_secs: 120,
            },
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
