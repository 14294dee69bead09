// src/lib.rs
// PeliSoft catalog core - client-side movie catalog engine
//
// Architecture:
// - Domain-centric: catalog state and its invariants live in domains
// - Snapshot-based: mutations return new immutable catalogs
// - Event-driven: services coordinate through a synchronous bus
// - External services (metadata source, like store, auth) sit behind
//   traits and are never read implicitly

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    paginate,
    seed_movies,
    validate_catalog,
    validate_movie,
    // Catalog
    Catalog,
    Comment,
    DomainError,
    DomainResult,
    FilterKey,
    // Movie
    MovieRecord,
    MAX_RECOMMENDATIONS,
};

// ============================================================================
// PUBLIC API - Services & Infrastructure
// ============================================================================

pub use application::AppState;
pub use error::{AppError, AppResult};
pub use events::{create_event_bus, DomainEvent, EventBus};
pub use integrations::tmdb::{MovieSource, TmdbClient, TmdbMovie};
pub use repositories::{LikeRepository, RestLikeRepository};
pub use services::{CatalogService, IngestionService, InMemorySessionGate, SessionGate};
