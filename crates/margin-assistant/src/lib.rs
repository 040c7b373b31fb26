//! Margin Assistant Layer
//!
//! Implementations of the `Assistant` trait from `margin-domain`.
//!
//! # Providers
//!
//! - `MockAssistant`: deterministic mock for testing and offline demos
//! - `HostedAssistant`: HTTP client for the hosted text-to-SQL assistant,
//!   with the authentication mode (access token vs. client credentials)
//!   selected once at startup via explicit configuration
//!
//! # Examples
//!
//! ```
//! use margin_assistant::MockAssistant;
//! use margin_domain::traits::Assistant;
//!
//! let assistant = MockAssistant::new("Here is your answer.");
//! let result = assistant.ask("any question").unwrap();
//! assert_eq!(result, "Here is your answer.");
//! ```

#![warn(missing_docs)]

pub mod hosted;
mod prompt;

use margin_domain::traits::Assistant as AssistantTrait;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use hosted::{AssistantConfig, AuthMode, HostedAssistant};
pub use prompt::QuestionBuilder;

/// Errors that can occur when querying an assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the assistant
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The configured space does not exist
    #[error("Space not found: {0}")]
    SpaceNotFound(String),

    /// Generic error
    #[error("Assistant error: {0}")]
    Other(String),
}

/// Ask a question and fold any failure into the response text.
///
/// Keeps the downstream extraction pipeline total: an assistant error
/// becomes an error answer the parser handles like any other response, so
/// the caller never has to branch on failure.
pub fn ask_text<A>(assistant: &A, question: &str) -> String
where
    A: AssistantTrait,
    A::Error: Display,
{
    match assistant.ask(question) {
        Ok(answer) => answer,
        Err(e) => format!("Error calling assistant: {}", e),
    }
}

/// Probe assistant health with a trivial question.
///
/// Returns `Ok(())` when the assistant answers with any non-empty text and
/// the failure description otherwise.
pub fn health_probe<A>(assistant: &A) -> Result<(), String>
where
    A: AssistantTrait,
    A::Error: Display,
{
    match assistant.ask("Hello, can you help me with the P&L data?") {
        Ok(answer) if !answer.trim().is_empty() => Ok(()),
        Ok(_) => Err("no response from assistant".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Mock assistant for deterministic testing
///
/// Returns pre-configured responses without any network calls.
///
/// # Examples
///
/// ```
/// use margin_assistant::MockAssistant;
/// use margin_domain::traits::Assistant;
///
/// let mut assistant = MockAssistant::default();
/// assistant.add_response("question1", "answer1");
/// assert_eq!(assistant.ask("question1").unwrap(), "answer1");
/// assert_eq!(assistant.ask("other").unwrap(), "Default mock answer");
/// ```
#[derive(Debug, Clone)]
pub struct MockAssistant {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAssistant {
    /// Create a MockAssistant with a fixed response for all questions
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given question
    pub fn add_response(&mut self, question: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(question.into(), response.into());
    }

    /// Configure an error for a specific question
    pub fn add_error(&mut self, question: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(question.into(), "ERROR".to_string());
    }

    /// Number of times `ask` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new("Default mock answer")
    }
}

impl AssistantTrait for MockAssistant {
    type Error = AssistantError;

    fn ask(&self, question: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(question) {
            if response == "ERROR" {
                return Err(AssistantError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}
