use crate::cli::ServeArgs;
use crate::infra::{AppState, KnowledgeStore};
use crate::routes::with_knowledge_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use triage_rules::config::AppConfig;
use triage_rules::error::AppError;

pub(crate) async fn run(mut args: ServeArgs, mut config: AppConfig) -> Result<(), AppError> {

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.knowledge.knowledge.take() {
        config.knowledge.document_path = Some(path);
    }

    // An invalid rule base must stop startup before the listener binds.
    let store = Arc::new(KnowledgeStore::open(
        config.knowledge.document_path.clone(),
    )?);
    let snapshot = store.snapshot();
    let source = config
        .knowledge
        .document_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    info!(
        symptoms = snapshot.catalog().len(),
        conditions = snapshot.rules().len(),
        %source,
        "knowledge base ready"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_knowledge_routes(store)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "symptom triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
