//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Claim set file did not parse
    #[error("Failed to parse claims TOML: {0}")]
    ClaimsParse(#[from] toml::de::Error),

    /// Fact table could not be loaded or written
    #[error("Fact table error: {0}")]
    Facts(#[from] margin_facts::FactError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
