//! HTTP request handlers for the dashboard API.
//!
//! Implements the ask, health, alerts, KPI, and config endpoints using
//! axum. Handlers are generic over the `Assistant` and `FactSource` seams
//! so tests can exercise them with the mock implementations.

use crate::kpis::compute_kpis;
use crate::payload::{table_payload, TablePayload};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use margin_assistant::{ask_text, health_probe, QuestionBuilder};
use margin_domain::traits::{Assistant, FactSource};
use margin_domain::Table;
use margin_facts::{demo_alerts, Kpi, OperationalAlert};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Shared application state
pub struct AppState<A, F> {
    /// The assistant collaborator, selected once at startup
    pub assistant: Arc<A>,
    /// The fact-table collaborator
    pub facts: Arc<F>,
    /// Non-sensitive configuration echoed by /api/config
    pub config_echo: ConfigEcho,
}

impl<A, F> Clone for AppState<A, F> {
    fn clone(&self) -> Self {
        Self {
            assistant: Arc::clone(&self.assistant),
            facts: Arc::clone(&self.facts),
            config_echo: self.config_echo.clone(),
        }
    }
}

/// Non-sensitive configuration summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEcho {
    /// Assistant space the server is bound to
    pub space_id: String,
    /// Authentication mode label ("token" or "client_credentials")
    pub auth_method: String,
    /// Where ground truth comes from ("csv" or "synthetic")
    pub facts_source: String,
}

/// Ask request body
#[derive(Debug, Deserialize)]
pub struct AskQuery {
    /// Natural-language question
    pub question: String,
    /// Optional caller-supplied context, prefixed ahead of the question
    #[serde(default)]
    pub context: Option<String>,
}

/// Ask response body
#[derive(Debug, Serialize, Deserialize)]
pub struct AskReply {
    /// Free-form answer text
    pub answer: String,
    /// Extracted SQL, when a statement was recognized
    pub sql: Option<String>,
    /// Extracted result table, when one was recognized
    pub data: Option<TablePayload>,
    /// "success" (failures degrade into the answer text)
    pub status: String,
}

/// Health of one component
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Explanation
    pub message: String,
}

impl ComponentHealth {
    fn healthy(message: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            message: message.into(),
        }
    }

    fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            message: message.into(),
        }
    }
}

/// Aggregated health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReply {
    /// The HTTP server itself
    pub app: ComponentHealth,
    /// The assistant collaborator (live probe)
    pub assistant: ComponentHealth,
    /// The fact-table collaborator
    pub facts: ComponentHealth,
}

/// Alerts response
#[derive(Debug, Serialize, Deserialize)]
pub struct AlertsReply {
    /// "success"
    pub status: String,
    /// Current operational alerts
    pub alerts: Vec<OperationalAlert>,
    /// Human-readable summary
    pub message: String,
}

/// KPI response
#[derive(Debug, Serialize, Deserialize)]
pub struct KpisReply {
    /// "success"
    pub status: String,
    /// Dashboard KPIs
    pub kpis: Vec<Kpi>,
    /// Human-readable summary
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// POST /api/ask - forward a question to the assistant and return the
/// structured view of its answer.
///
/// The pipeline is total: an assistant failure becomes an error answer with
/// empty sql/data rather than an HTTP error.
async fn ask<A, F>(
    State(state): State<AppState<A, F>>,
    Json(query): Json<AskQuery>,
) -> Result<Json<AskReply>, AppError>
where
    A: Assistant + Send + Sync + 'static,
    A::Error: Display,
    F: FactSource + Send + Sync + 'static,
{
    let request_id = Uuid::now_v7();
    info!(
        %request_id,
        question = %query.question.chars().take(100).collect::<String>(),
        "assistant query received"
    );

    let mut builder = QuestionBuilder::new(&query.question);
    if let Some(context) = &query.context {
        builder = builder.with_context(context);
    }
    let question = builder.build();

    let assistant = Arc::clone(&state.assistant);
    let answer = tokio::task::spawn_blocking(move || ask_text(assistant.as_ref(), &question))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let parsed = margin_extractor::parse(&answer);

    info!(
        %request_id,
        sql_found = parsed.has_sql(),
        table_rows = parsed.table.rows.len(),
        "assistant query completed"
    );

    Ok(Json(AskReply {
        sql: if parsed.sql.is_empty() {
            None
        } else {
            Some(parsed.sql.clone())
        },
        data: if parsed.table.is_empty() {
            None
        } else {
            Some(table_payload(&parsed.table))
        },
        answer: parsed.answer,
        status: "success".to_string(),
    }))
}

/// GET /api/health - per-component health
async fn health<A, F>(State(state): State<AppState<A, F>>) -> Result<Json<HealthReply>, AppError>
where
    A: Assistant + Send + Sync + 'static,
    A::Error: Display,
    F: FactSource + Send + Sync + 'static,
    F::Error: Display + Send + 'static,
{
    let assistant = Arc::clone(&state.assistant);
    let assistant_health =
        tokio::task::spawn_blocking(move || health_probe(assistant.as_ref()))
            .await
            .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    let assistant_health = match assistant_health {
        Ok(()) => ComponentHealth::healthy("assistant connection active"),
        Err(message) => ComponentHealth::unhealthy(message),
    };

    let facts_health = match load_facts(&state).await? {
        Ok(table) => ComponentHealth::healthy(format!("{} fact rows available", table.rows.len())),
        Err(message) => ComponentHealth::unhealthy(message),
    };

    Ok(Json(HealthReply {
        app: ComponentHealth::healthy("server running"),
        assistant: assistant_health,
        facts: facts_health,
    }))
}

/// GET /api/operations/alerts - current operational alerts
async fn alerts() -> Json<AlertsReply> {
    let alerts = demo_alerts();
    let message = format!("Retrieved {} operational alerts", alerts.len());
    Json(AlertsReply {
        status: "success".to_string(),
        alerts,
        message,
    })
}

/// GET /api/analytics/kpis - dashboard key performance indicators
async fn kpis<A, F>(State(state): State<AppState<A, F>>) -> Result<Json<KpisReply>, AppError>
where
    A: Assistant + Send + Sync + 'static,
    F: FactSource + Send + Sync + 'static,
    F::Error: Display + Send + 'static,
{
    // Fall back to the demo KPIs when the fact source is unavailable
    let kpis = match load_facts(&state).await? {
        Ok(table) => compute_kpis(&table),
        Err(message) => {
            error!(%message, "fact source unavailable, serving demo KPIs");
            compute_kpis(&Table::empty())
        }
    };

    Ok(Json(KpisReply {
        status: "success".to_string(),
        kpis,
        message: "KPIs calculated successfully".to_string(),
    }))
}

/// GET /api/config - non-sensitive configuration echo
async fn config_echo<A, F>(State(state): State<AppState<A, F>>) -> Json<ConfigEcho>
where
    A: Assistant + Send + Sync + 'static,
    F: FactSource + Send + Sync + 'static,
{
    Json(state.config_echo.clone())
}

/// Load the fact table off the async runtime
async fn load_facts<A, F>(
    state: &AppState<A, F>,
) -> Result<Result<Table, String>, AppError>
where
    A: Assistant + Send + Sync + 'static,
    F: FactSource + Send + Sync + 'static,
    F::Error: Display + Send + 'static,
{
    let facts = Arc::clone(&state.facts);
    let result = tokio::task::spawn_blocking(move || {
        facts.fact_table().map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;
    Ok(result)
}

/// Create the axum router with all routes
pub fn create_router<A, F>(state: AppState<A, F>) -> AxumRouter
where
    A: Assistant + Send + Sync + 'static,
    A::Error: Display,
    F: FactSource + Send + Sync + 'static,
    F::Error: Display + Send + 'static,
{
    AxumRouter::new()
        .route("/api/ask", post(ask::<A, F>))
        .route("/api/health", get(health::<A, F>))
        .route("/api/operations/alerts", get(alerts))
        .route("/api/analytics/kpis", get(kpis::<A, F>))
        .route("/api/config", get(config_echo::<A, F>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use margin_assistant::{AssistantError, MockAssistant};
    use margin_facts::{MemoryFactStore, SyntheticPnl};
    use tower::ServiceExt; // for oneshot

    const TABLE_ANSWER: &str = "Here is what I found:\n\n```sql\nSELECT Type, Actual FROM pnl\n```\n\n| Type | Actual |\n|------|--------|\n| Food | 320433 |\n";

    fn create_test_state(
        assistant: MockAssistant,
    ) -> AppState<MockAssistant, MemoryFactStore> {
        let facts = SyntheticPnl::new().with_stores(2).with_periods(1).generate();
        AppState {
            assistant: Arc::new(assistant),
            facts: Arc::new(MemoryFactStore::new(facts)),
            config_echo: ConfigEcho {
                space_id: "pnl-test".to_string(),
                auth_method: "token".to_string(),
                facts_source: "synthetic".to_string(),
            },
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let state = create_test_state(MockAssistant::new("Happy to help."));
        let app = create_router(state);

        let request = Request::builder()
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["app"]["status"], "healthy");
        assert_eq!(json["assistant"]["status"], "healthy");
        assert_eq!(json["facts"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ask_returns_extracted_sql_and_table() {
        let state = create_test_state(MockAssistant::new(TABLE_ANSWER));
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/ask")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "How did food sales do?"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["sql"], "SELECT Type, Actual FROM pnl");
        assert_eq!(json["data"]["shape"][0], 1);
        assert_eq!(json["data"]["rows"][0]["Type"], "Food");
        assert_eq!(json["data"]["rows"][0]["Actual"], 320433.0);
    }

    #[tokio::test]
    async fn test_ask_without_structure_omits_fields() {
        let state = create_test_state(MockAssistant::new("Just a prose answer."));
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/ask")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "Anything?"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["answer"], "Just a prose answer.");
        assert!(json["sql"].is_null());
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_ask_degrades_on_assistant_error() {
        // An assistant that always fails; the endpoint still answers 200
        // with the failure folded into the answer text
        struct FailingAssistant;
        impl Assistant for FailingAssistant {
            type Error = AssistantError;
            fn ask(&self, _question: &str) -> Result<String, Self::Error> {
                Err(AssistantError::Communication("connection refused".to_string()))
            }
        }

        let state = AppState {
            assistant: Arc::new(FailingAssistant),
            facts: Arc::new(MemoryFactStore::new(Table::empty())),
            config_echo: ConfigEcho {
                space_id: "pnl-test".to_string(),
                auth_method: "token".to_string(),
                facts_source: "synthetic".to_string(),
            },
        };
        let app = create_router(state);

        let request = Request::builder()
            .method("POST")
            .uri("/api/ask")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "q"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["answer"]
            .as_str()
            .unwrap()
            .starts_with("Error calling assistant:"));
        assert!(json["sql"].is_null());
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_alerts() {
        let state = create_test_state(MockAssistant::default());
        let app = create_router(state);

        let request = Request::builder()
            .uri("/api/operations/alerts")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["alerts"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_kpis_from_fact_table() {
        let state = create_test_state(MockAssistant::default());
        let app = create_router(state);

        let request = Request::builder()
            .uri("/api/analytics/kpis")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let kpis = json["kpis"].as_array().unwrap();
        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[3]["name"], "Stores Reporting");
        assert_eq!(kpis[3]["value"], 2.0);
    }

    #[tokio::test]
    async fn test_config_echo() {
        let state = create_test_state(MockAssistant::default());
        let app = create_router(state);

        let request = Request::builder()
            .uri("/api/config")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["space_id"], "pnl-test");
        assert_eq!(json["auth_method"], "token");
    }
}
