// src/services/catalog_service.rs
//
// CatalogService owns the authoritative catalog snapshot. Every user
// action swaps the whole snapshot atomically; derived views are always
// computed from the current snapshot, never patched.

use std::sync::{Arc, RwLock};

use crate::domain::{paginate, Catalog, DomainError, FilterKey, MovieRecord};
use crate::error::{AppError, AppResult};
use crate::events::{
    CommentAdded, EventBus, FavoriteToggled, MovieDisliked, MovieLiked, WatchLaterToggled,
};
use crate::repositories::LikeRepository;
use crate::services::session_gate::{require_user, SessionGate};

pub struct CatalogService {
    catalog: RwLock<Catalog>,
    event_bus: Arc<EventBus>,
    like_repo: Arc<dyn LikeRepository>,
    session_gate: Arc<dyn SessionGate>,
}

impl CatalogService {
    pub fn new(
        initial: Catalog,
        event_bus: Arc<EventBus>,
        like_repo: Arc<dyn LikeRepository>,
        session_gate: Arc<dyn SessionGate>,
    ) -> Self {
        Self {
            catalog: RwLock::new(initial),
            event_bus,
            like_repo,
            session_gate,
        }
    }

    /// Replace the working set wholesale (completed remote load).
    pub fn replace_catalog(&self, catalog: Catalog) {
        *self.catalog.write().unwrap() = catalog;
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Catalog {
        self.catalog.read().unwrap().clone()
    }

    /// The catalog view, gated on an active session.
    pub fn open(&self) -> AppResult<Catalog> {
        require_user(self.session_gate.as_ref())?;
        Ok(self.snapshot())
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    pub fn toggle_favorite(&self, id: i64) -> AppResult<()> {
        if let Some(catalog) = self.apply(|c| c.toggle_favorite(id))? {
            let is_favorite = catalog.get(id).map(|m| m.is_favorite).unwrap_or(false);
            self.event_bus.emit(FavoriteToggled::new(id, is_favorite));
        }
        Ok(())
    }

    pub fn toggle_watch_later(&self, id: i64) -> AppResult<()> {
        if let Some(catalog) = self.apply(|c| c.toggle_watch_later(id))? {
            let watch_later = catalog.get(id).map(|m| m.watch_later).unwrap_or(false);
            self.event_bus.emit(WatchLaterToggled::new(id, watch_later));
        }
        Ok(())
    }

    /// Increment likes and notify the persistence bridge for the current
    /// user. A bridge failure is logged and never rolls back the local
    /// mutation; an absent session user skips the write.
    pub async fn add_like(&self, id: i64) -> AppResult<()> {
        let applied = self.apply(|c| c.add_like(id))?;
        let Some(catalog) = applied else {
            return Ok(());
        };

        let likes = catalog.get(id).map(|m| m.likes).unwrap_or(0);
        self.event_bus.emit(MovieLiked::new(id, likes));

        if let Some(user_id) = self.session_gate.current_user() {
            if let Err(err) = self.like_repo.add_liked_movie(&user_id, id).await {
                log::warn!("liked-movie write for user {} failed: {}", user_id, err);
            }
        }

        Ok(())
    }

    pub fn add_dislike(&self, id: i64) -> AppResult<()> {
        if let Some(catalog) = self.apply(|c| c.add_dislike(id))? {
            let dislikes = catalog.get(id).map(|m| m.dislikes).unwrap_or(0);
            self.event_bus.emit(MovieDisliked::new(id, dislikes));
        }
        Ok(())
    }

    /// Decrement likes, clamped at 0.
    pub fn remove_like(&self, id: i64) -> AppResult<()> {
        self.apply(|c| c.remove_like(id))?;
        Ok(())
    }

    /// Decrement dislikes, clamped at 0.
    pub fn remove_dislike(&self, id: i64) -> AppResult<()> {
        self.apply(|c| c.remove_dislike(id))?;
        Ok(())
    }

    /// Append a comment. Empty text is an invariant violation and is
    /// surfaced to the caller, unlike a missing id.
    pub fn add_comment(&self, id: i64, username: &str, text: &str) -> AppResult<()> {
        if self.apply(|c| c.add_comment(id, username, text))?.is_some() {
            self.event_bus
                .emit(CommentAdded::new(id, username.to_string()));
        }
        Ok(())
    }

    // ========================================================================
    // QUERIES (pure functions of the current snapshot)
    // ========================================================================

    pub fn filter(&self, key: &FilterKey) -> Vec<MovieRecord> {
        self.catalog.read().unwrap().filter(key)
    }

    pub fn facets(&self) -> Vec<String> {
        self.catalog.read().unwrap().facets()
    }

    pub fn recommendations(&self) -> Vec<MovieRecord> {
        self.catalog.read().unwrap().recommendations()
    }

    /// One page of the filtered sequence.
    pub fn page(&self, key: &FilterKey, page: usize, page_size: usize) -> Vec<MovieRecord> {
        paginate(&self.filter(key), page, page_size)
    }

    /// Swap the snapshot under the write lock; callers never observe a
    /// partially-updated record set. A missing id degrades to a logged
    /// no-op; other domain errors propagate.
    fn apply<F>(&self, op: F) -> AppResult<Option<Catalog>>
    where
        F: FnOnce(&Catalog) -> Result<Catalog, DomainError>,
    {
        let mut guard = self.catalog.write().unwrap();
        match op(&guard) {
            Ok(next) => {
                *guard = next.clone();
                Ok(Some(next))
            }
            Err(DomainError::NotFound(what)) => {
                log::warn!("mutation on unknown record ignored: {}", what);
                Ok(None)
            }
            Err(err) => Err(AppError::Domain(err)),
        }
    }
}
