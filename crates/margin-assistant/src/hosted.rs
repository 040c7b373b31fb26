//! Hosted assistant client
//!
//! HTTP client for the hosted text-to-SQL assistant. The service exposes
//! conversation "spaces" scoped to a dataset; one question per request,
//! one free-form answer per response.
//!
//! Authentication is selected once at startup from configuration: a
//! personal access token for local development, or client credentials for
//! managed deployments. There is no environment sniffing at call sites and
//! no retry logic; a failed request surfaces as a single typed error and
//! the caller decides what to do with it.

use crate::AssistantError;
use margin_domain::traits::Assistant as AssistantTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default timeout for assistant requests (120 seconds; the assistant may
/// run a warehouse query before answering)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// How the client authenticates against the hosted endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum AuthMode {
    /// Personal access token (local development)
    Token {
        /// The bearer token
        token: String,
    },

    /// Client credentials (managed deployments)
    ClientCredentials {
        /// OAuth client id
        client_id: String,
        /// OAuth client secret
        client_secret: String,
    },
}

impl AuthMode {
    /// Short label for logging and the config echo endpoint
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Token { .. } => "token",
            AuthMode::ClientCredentials { .. } => "client_credentials",
        }
    }
}

/// Configuration for the hosted assistant client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of the hosted service (e.g. "https://assistant.example.com")
    pub endpoint: String,

    /// Space identifier the questions are scoped to
    pub space_id: String,

    /// Authentication mode
    pub auth: AuthMode,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AssistantConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.space_id.is_empty() {
            return Err("space_id must not be empty".to_string());
        }
        Ok(())
    }
}

/// Request body for the ask endpoint
#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Response from the ask endpoint
#[derive(Deserialize)]
struct AskResponse {
    answer: String,
}

/// HTTP client for the hosted assistant
pub struct HostedAssistant {
    config: AssistantConfig,
    client: reqwest::Client,
}

impl HostedAssistant {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is incomplete.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        config.validate().map_err(AssistantError::Other)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistantError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The configured space identifier
    pub fn space_id(&self) -> &str {
        &self.config.space_id
    }

    /// The configured authentication mode label
    pub fn auth_label(&self) -> &'static str {
        self.config.auth.label()
    }

    /// Ask a question over HTTP.
    ///
    /// Single attempt: retries, pooling, and credential refresh belong to
    /// the hosting layer, not this client.
    pub async fn ask_async(&self, question: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/spaces/{}/ask",
            self.config.endpoint.trim_end_matches('/'),
            self.config.space_id
        );

        debug!(space_id = %self.config.space_id, "sending question to hosted assistant");

        let request = self.client.post(&url).json(&AskRequest { question });
        let request = match &self.config.auth {
            AuthMode::Token { token } => request.bearer_auth(token),
            AuthMode::ClientCredentials {
                client_id,
                client_secret,
            } => request.basic_auth(client_id, Some(client_secret)),
        };

        let response = request
            .send()
            .await
            .map_err(|e| AssistantError::Communication(format!("Request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(AssistantError::SpaceNotFound(self.config.space_id.clone()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistantError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: AskResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(parsed.answer)
    }
}

impl AssistantTrait for HostedAssistant {
    type Error = AssistantError;

    fn ask(&self, question: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async client; callers on an async
        // runtime should dispatch through spawn_blocking
        tokio::runtime::Runtime::new()
            .map_err(|e| AssistantError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.ask_async(question).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_config() -> AssistantConfig {
        AssistantConfig {
            endpoint: "http://localhost:8089".to_string(),
            space_id: "pnl-demo".to_string(),
            auth: AuthMode::Token {
                token: "dev-token".to_string(),
            },
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[test]
    fn test_client_creation() {
        let assistant = HostedAssistant::new(token_config()).unwrap();
        assert_eq!(assistant.space_id(), "pnl-demo");
        assert_eq!(assistant.auth_label(), "token");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = token_config();
        config.endpoint = String::new();
        assert!(HostedAssistant::new(config).is_err());

        let mut config = token_config();
        config.space_id = String::new();
        assert!(HostedAssistant::new(config).is_err());
    }

    #[test]
    fn test_config_from_toml_token() {
        let toml_str = r#"
            endpoint = "https://assistant.example.com"
            space_id = "pnl-prod"

            [auth]
            method = "token"
            token = "secret-token"
        "#;

        let config: AssistantConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.space_id, "pnl-prod");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(matches!(config.auth, AuthMode::Token { .. }));
    }

    #[test]
    fn test_config_from_toml_client_credentials() {
        let toml_str = r#"
            endpoint = "https://assistant.example.com"
            space_id = "pnl-prod"
            timeout_secs = 60

            [auth]
            method = "client_credentials"
            client_id = "app-id"
            client_secret = "app-secret"
        "#;

        let config: AssistantConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.auth.label(), "client_credentials");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        let mut config = token_config();
        config.endpoint = "http://127.0.0.1:1".to_string();
        config.timeout_secs = 1;

        let assistant = HostedAssistant::new(config).unwrap();
        let result = assistant.ask_async("test").await;
        assert!(matches!(result, Err(AssistantError::Communication(_))));
    }
}
