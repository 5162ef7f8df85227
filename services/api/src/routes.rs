use crate::infra::{AppState, KnowledgeStore};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use triage_rules::diagnosis::{DiagnosisReport, ObservedSymptoms};
use triage_rules::error::AppError;
use triage_rules::knowledge::{ConditionRule, SymptomEntry};

#[derive(Debug, Deserialize)]
pub(crate) struct DiagnoseRequest {
    #[serde(default)]
    pub(crate) symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReloadResponse {
    pub(crate) symptoms: usize,
    pub(crate) conditions: usize,
}

pub(crate) fn with_knowledge_routes(store: Arc<KnowledgeStore>) -> Router {
    Router::new()
        .route("/api/v1/symptoms", get(symptoms_endpoint))
        .route("/api/v1/conditions", get(conditions_endpoint))
        .route(
            "/api/v1/conditions/:condition_id",
            get(condition_endpoint),
        )
        .route("/api/v1/diagnose", post(diagnose_endpoint))
        .route("/api/v1/knowledge/reload", post(reload_endpoint))
        .with_state(store)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn symptoms_endpoint(
    State(store): State<Arc<KnowledgeStore>>,
) -> Json<Vec<SymptomEntry>> {
    Json(store.snapshot().catalog().entries().to_vec())
}

pub(crate) async fn conditions_endpoint(
    State(store): State<Arc<KnowledgeStore>>,
) -> Json<Vec<ConditionRule>> {
    Json(store.snapshot().rules().rules().to_vec())
}

pub(crate) async fn condition_endpoint(
    State(store): State<Arc<KnowledgeStore>>,
    Path(condition_id): Path<String>,
) -> Result<Json<ConditionRule>, AppError> {
    let knowledge = store.snapshot();
    let rule = knowledge.rules().rule(&condition_id)?;
    Ok(Json(rule.clone()))
}

pub(crate) async fn diagnose_endpoint(
    State(store): State<Arc<KnowledgeStore>>,
    Json(payload): Json<DiagnoseRequest>,
) -> Result<Json<DiagnosisReport>, AppError> {
    let observed: ObservedSymptoms = payload
        .symptoms
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .collect();
    if observed.is_empty() {
        return Err(AppError::EmptySelection);
    }

    let knowledge = store.snapshot();
    let results = knowledge.engine().diagnose(&observed);
    let report = DiagnosisReport::compose(&results, &knowledge, &observed)?;
    Ok(Json(report))
}

pub(crate) async fn reload_endpoint(
    State(store): State<Arc<KnowledgeStore>>,
) -> Result<Json<ReloadResponse>, AppError> {
    // Document loading reads the file synchronously.
    let knowledge = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err)))??;
    info!(conditions = knowledge.rules().len(), "knowledge reloaded via api");
    Ok(Json(ReloadResponse {
        symptoms: knowledge.catalog().len(),
        conditions: knowledge.rules().len(),
    }))
}
