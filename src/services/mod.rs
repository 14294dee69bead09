// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod ingestion_service;
pub mod session_gate;


// Re-export all services and their types
pub use catalog_service::CatalogService;

pub use ingestion_service::{infer_category, infer_saga, normalize, IngestionService};

pub use session_gate::{require_user, InMemorySessionGate, SessionGate};

#[cfg(test)]
pub use session_gate::MockSessionGate;
