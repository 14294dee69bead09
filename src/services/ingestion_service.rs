// src/services/ingestion_service.rs
//
// CatalogIngestion: turns raw discovery payloads into MovieRecords.
// Category and saga inference, field defaults, seed merge, and the
// load-with-fallback path live here.

use std::sync::Arc;

use crate::domain::{seed_movies, Catalog, MovieRecord};
use crate::error::AppResult;
use crate::events::{CatalogLoadFailed, CatalogLoaded, EventBus};
use crate::integrations::tmdb::{
    MovieSource, TmdbMovie, GENRE_FANTASY, GENRE_HORROR, GENRE_ROMANCE,
};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Known saga names, substring-matched against titles.
const SAGAS: &[(&str, &str)] = &[
    ("Harry Potter", "Harry Potter"),
    ("Crepúsculo", "Crepúsculo"),
    ("Twilight", "Crepúsculo"),
];

pub struct IngestionService {
    source: Arc<dyn MovieSource>,
    event_bus: Arc<EventBus>,
}

impl IngestionService {
    pub fn new(source: Arc<dyn MovieSource>, event_bus: Arc<EventBus>) -> Self {
        Self { source, event_bus }
    }

    /// Fetch, normalize and merge the remote catalog with the seed set.
    ///
    /// Ingested records are merged AFTER the seeds; when the remote set
    /// repeats an id already present, the earlier record wins so that id
    /// uniqueness holds. On fetch or decode failure the seed-only
    /// catalog is returned and the condition is logged, never raised.
    pub async fn load_catalog(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => {
                log::info!("catalog loaded: {} records", catalog.len());
                self.event_bus.emit(CatalogLoaded::new(
                    catalog.len().saturating_sub(seed_movies().len()),
                    catalog.len(),
                ));
                catalog
            }
            Err(err) => {
                log::warn!("catalog load failed, falling back to seed set: {}", err);
                self.event_bus.emit(CatalogLoadFailed::new(err.to_string()));
                Self::seed_catalog()
            }
        }
    }

    /// The seed-only catalog, visible before any remote load.
    pub fn seed_catalog() -> Catalog {
        Catalog::new(seed_movies()).expect("seed set has unique ids")
    }

    async fn try_load(&self) -> AppResult<Catalog> {
        let payloads = self.source.discover_movies().await?;
        let ingested = payloads.into_iter().map(normalize);

        let mut records = seed_movies();
        for movie in ingested {
            if !records.iter().any(|existing| existing.id == movie.id) {
                records.push(movie);
            }
        }

        Ok(Catalog::new(records)?)
    }
}

/// Normalize one raw payload into a MovieRecord with defaulted
/// user-facing state.
pub fn normalize(payload: TmdbMovie) -> MovieRecord {
    let category = infer_category(&payload.genre_ids);
    let saga = infer_saga(&payload.title);
    let poster_url = payload
        .poster_path
        .map(|path| format!("{}{}", POSTER_BASE_URL, path))
        .unwrap_or_default();
    // No real source exists; synthesize a playable URI from the id
    let video_url = Some(format!("https://example.com/{}.mp4", payload.id));

    MovieRecord::new(
        payload.id,
        payload.title,
        category.to_string(),
        saga,
        poster_url,
        video_url,
        payload.overview,
        payload.release_date,
    )
}

/// Fixed priority order, first match wins: horror, then fantasy, then
/// romance, falling back to "Otros".
pub fn infer_category(genre_ids: &[i64]) -> &'static str {
    if genre_ids.contains(&GENRE_HORROR) {
        return "Terror";
    }
    if genre_ids.contains(&GENRE_FANTASY) {
        return "Fantasía";
    }
    if genre_ids.contains(&GENRE_ROMANCE) {
        return "Romance";
    }
    "Otros"
}

/// Substring-match the title against the known saga list; no match
/// leaves the saga absent.
pub fn infer_saga(title: &str) -> Option<String> {
    SAGAS
        .iter()
        .find(|(needle, _)| title.contains(needle))
        .map(|(_, saga)| saga.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::integrations::tmdb::MockMovieSource;

    fn payload(id: i64, title: &str, genre_ids: Vec<i64>) -> TmdbMovie {
        TmdbMovie {
            id,
            title: title.to_string(),
            genre_ids,
            poster_path: Some(format!("/{}.jpg", id)),
            overview: "overview".to_string(),
            release_date: "2023-10-27".to_string(),
            popularity: 0.0,
            original_language: "es".to_string(),
        }
    }

    #[test]
    fn test_horror_wins_over_fantasy() {
        assert_eq!(infer_category(&[27, 14]), "Terror");
        assert_eq!(infer_category(&[14, 27]), "Terror");
    }

    #[test]
    fn test_category_priority_chain() {
        assert_eq!(infer_category(&[14, 10749]), "Fantasía");
        assert_eq!(infer_category(&[10749]), "Romance");
        assert_eq!(infer_category(&[99]), "Otros");
        assert_eq!(infer_category(&[]), "Otros");
    }

    #[test]
    fn test_saga_inference() {
        assert_eq!(
            infer_saga("Harry Potter y la piedra filosofal").as_deref(),
            Some("Harry Potter")
        );
        assert_eq!(infer_saga("Crepúsculo: Luna Nueva").as_deref(), Some("Crepúsculo"));
        assert_eq!(infer_saga("The Twilight Saga: Eclipse").as_deref(), Some("Crepúsculo"));
        assert_eq!(infer_saga("El Conjuro"), None);
    }

    #[test]
    fn test_normalize_defaults_and_urls() {
        let movie = normalize(payload(631842, "Noche de brujas", vec![27]));

        assert_eq!(movie.id, 631842);
        assert_eq!(movie.category, "Terror");
        assert_eq!(movie.saga, None);
        assert_eq!(movie.poster_url, "https://image.tmdb.org/t/p/w500/631842.jpg");
        assert_eq!(
            movie.video_url.as_deref(),
            Some("https://example.com/631842.mp4")
        );
        assert_eq!(movie.likes, 0);
        assert_eq!(movie.dislikes, 0);
        assert!(!movie.is_favorite);
        assert!(!movie.watch_later);
        assert!(movie.comments.is_empty());
    }

    #[tokio::test]
    async fn test_load_merges_after_seed_set() {
        let mut source = MockMovieSource::new();
        source
            .expect_discover_movies()
            .returning(|| Ok(vec![payload(631842, "Noche de brujas", vec![27])]));

        let bus = Arc::new(EventBus::new());
        let service = IngestionService::new(Arc::new(source), Arc::clone(&bus));

        let catalog = service.load_catalog().await;
        assert_eq!(catalog.len(), 6);
        // Seeds come first, ingested records after
        assert_eq!(catalog.records()[0].id, 1);
        assert_eq!(catalog.records()[5].id, 631842);

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "CatalogLoaded");
    }

    #[tokio::test]
    async fn test_load_drops_duplicate_ids_seed_wins() {
        let mut source = MockMovieSource::new();
        source.expect_discover_movies().returning(|| {
            Ok(vec![
                payload(1, "Duplicado del seed", vec![27]),
                payload(631842, "Noche de brujas", vec![27]),
            ])
        });

        let bus = Arc::new(EventBus::new());
        let service = IngestionService::new(Arc::new(source), bus);

        let catalog = service.load_catalog().await;
        assert_eq!(catalog.len(), 6);
        // Seed record 1 kept its original title
        assert_eq!(catalog.get(1).unwrap().title, "Harry Potter y la piedra filosofal");
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_seed_set() {
        let mut source = MockMovieSource::new();
        source
            .expect_discover_movies()
            .returning(|| Err(AppError::MetadataApi("connection refused".to_string())));

        let bus = Arc::new(EventBus::new());
        let service = IngestionService::new(Arc::new(source), Arc::clone(&bus));

        let catalog = service.load_catalog().await;
        assert_eq!(catalog, IngestionService::seed_catalog());

        let log = bus.get_event_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].event_type, "CatalogLoadFailed");
    }
}
