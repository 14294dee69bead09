// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::integrations::tmdb::TmdbClient;
use crate::repositories::RestLikeRepository;
use crate::services::{CatalogService, IngestionService, InMemorySessionGate, SessionGate};

/// Application state shared with the embedding shell.
/// All fields are Arc-wrapped for thread-safe sharing across views.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session_gate: Arc<InMemorySessionGate>,
    pub ingestion_service: Arc<IngestionService>,
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    /// Wire the full service graph against the real external endpoints.
    /// The catalog starts at the seed set; call `load` to populate it.
    pub fn new(tmdb_api_key: impl Into<String>, like_store_url: impl Into<String>) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let session_gate = Arc::new(InMemorySessionGate::new(Arc::clone(&event_bus)));

        let source = Arc::new(TmdbClient::new(tmdb_api_key));
        let ingestion_service = Arc::new(IngestionService::new(source, Arc::clone(&event_bus)));

        let like_repo = Arc::new(RestLikeRepository::new(like_store_url));
        let catalog_service = Arc::new(CatalogService::new(
            IngestionService::seed_catalog(),
            Arc::clone(&event_bus),
            like_repo,
            Arc::clone(&session_gate) as Arc<dyn SessionGate>,
        ));

        Self {
            event_bus,
            session_gate,
            ingestion_service,
            catalog_service,
        }
    }

    /// Run the one-shot remote load and swap in the result. Failure has
    /// already degraded to the seed set inside the ingestion service, so
    /// this never surfaces an error to the view.
    pub async fn load(&self) {
        let catalog = self.ingestion_service.load_catalog().await;
        self.catalog_service.replace_catalog(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_state_wires_service_graph() {
        let state = AppState::new("test-key", "http://localhost:9999");

        // Catalog starts at the seed set, gated on a session
        assert!(matches!(
            state.catalog_service.open(),
            Err(AppError::Unauthorized)
        ));

        state.session_gate.login("user-1");
        let catalog = state.catalog_service.open().unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
