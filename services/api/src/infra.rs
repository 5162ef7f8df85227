use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};
use tracing::info;
use triage_rules::error::AppError;
use triage_rules::knowledge::{DocumentError, KnowledgeBase, KnowledgeLoader};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Holds the active knowledge snapshot. Readers clone the `Arc` once per
/// request; a reload replaces it whole, so a diagnosis never mixes versions.
pub(crate) struct KnowledgeStore {
    current: RwLock<Arc<KnowledgeBase>>,
    source: Option<PathBuf>,
}

impl KnowledgeStore {
    pub(crate) fn new(knowledge: KnowledgeBase, source: Option<PathBuf>) -> Self {
        Self {
            current: RwLock::new(Arc::new(knowledge)),
            source,
        }
    }

    pub(crate) fn open(source: Option<PathBuf>) -> Result<Self, DocumentError> {
        let knowledge = load_knowledge(source.as_deref())?;
        Ok(Self::new(knowledge, source))
    }

    pub(crate) fn snapshot(&self) -> Arc<KnowledgeBase> {
        Arc::clone(&self.current.read().expect("knowledge lock poisoned"))
    }

    /// Re-reads the configured document. On failure the previous snapshot
    /// stays active.
    pub(crate) fn reload(&self) -> Result<Arc<KnowledgeBase>, AppError> {
        let path = self.source.as_deref().ok_or(AppError::ReloadUnavailable)?;
        let knowledge = Arc::new(KnowledgeLoader::from_path(path)?);

        *self.current.write().expect("knowledge lock poisoned") = Arc::clone(&knowledge);
        info!(
            path = %path.display(),
            conditions = knowledge.rules().len(),
            "knowledge snapshot replaced"
        );
        Ok(knowledge)
    }
}

pub(crate) fn load_knowledge(path: Option<&Path>) -> Result<KnowledgeBase, DocumentError> {
    match path {
        Some(path) => KnowledgeLoader::from_path(path),
        None => Ok(KnowledgeBase::standard()),
    }
}
