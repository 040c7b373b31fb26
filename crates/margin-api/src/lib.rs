//! Margin API
//!
//! Thin HTTP surface of the analytics dashboard: forwards natural-language
//! questions to the hosted assistant, returns the structured view of each
//! answer, and serves the dashboard's alert/KPI/config endpoints.
//!
//! The assistant and fact-table collaborators are chosen once at startup
//! from configuration; the handlers only see the trait seams.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
mod kpis;
mod payload;

use config::ApiConfig;
use handlers::{create_router, AppState, ConfigEcho};
use margin_assistant::HostedAssistant;
use margin_domain::traits::FactSource;
use margin_facts::{CsvFactStore, FactError, MemoryFactStore, SyntheticPnl};
use margin_domain::Table;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub use payload::{table_payload, TablePayload};

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Assistant client construction error
    #[error("Assistant error: {0}")]
    Assistant(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Fact backend selected at startup: a configured CSV file, or the
/// synthetic demo table when none is configured
pub enum FactBackend {
    /// CSV-backed ground truth
    Csv(CsvFactStore),
    /// Seeded synthetic demo data
    Synthetic(MemoryFactStore),
}

impl FactSource for FactBackend {
    type Error = FactError;

    fn fact_table(&self) -> Result<Table, Self::Error> {
        match self {
            FactBackend::Csv(store) => store.fact_table(),
            FactBackend::Synthetic(store) => store.fact_table(),
        }
    }
}

/// Start the API HTTP server
///
/// Builds the assistant client and fact backend from configuration and
/// serves until shutdown.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Margin API");
    info!("Bind address: {}", config.bind_addr());
    info!("Assistant space: {}", config.assistant.space_id);
    info!("Auth method: {}", config.assistant.auth.label());

    let assistant = HostedAssistant::new(config.assistant.clone())
        .map_err(|e| ApiError::Assistant(e.to_string()))?;

    let (facts, facts_source) = match &config.facts_csv {
        Some(path) => {
            info!("Fact source: CSV at {}", path.display());
            (FactBackend::Csv(CsvFactStore::new(path)), "csv")
        }
        None => {
            info!("Fact source: synthetic demo data");
            let table = SyntheticPnl::new().generate();
            (
                FactBackend::Synthetic(MemoryFactStore::new(table)),
                "synthetic",
            )
        }
    };

    let state = AppState {
        assistant: Arc::new(assistant),
        facts: Arc::new(facts),
        config_echo: ConfigEcho {
            space_id: config.assistant.space_id.clone(),
            auth_method: config.assistant.auth.label().to_string(),
            facts_source: facts_source.to_string(),
        },
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}
