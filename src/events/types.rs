// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// Events are facts, not commands: they carry only the data needed to
// react, and no business logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG LIFECYCLE EVENTS
// ============================================================================

/// Emitted when the remote catalog load completes and the working set
/// has been replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub fetched: usize,
    pub total: usize,
}

impl CatalogLoaded {
    pub fn new(fetched: usize, total: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            fetched,
            total,
        }
    }
}

impl DomainEvent for CatalogLoaded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CatalogLoaded"
    }
}

/// Emitted when the remote fetch fails and the view falls back to the
/// seed record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl CatalogLoadFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl DomainEvent for CatalogLoadFailed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CatalogLoadFailed"
    }
}

// ============================================================================
// USER ACTION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieLiked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub likes: u32,
}

impl MovieLiked {
    pub fn new(movie_id: i64, likes: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            likes,
        }
    }
}

impl DomainEvent for MovieLiked {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "MovieLiked"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDisliked {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub dislikes: u32,
}

impl MovieDisliked {
    pub fn new(movie_id: i64, dislikes: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            dislikes,
        }
    }
}

impl DomainEvent for MovieDisliked {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "MovieDisliked"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub is_favorite: bool,
}

impl FavoriteToggled {
    pub fn new(movie_id: i64, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            is_favorite,
        }
    }
}

impl DomainEvent for FavoriteToggled {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "FavoriteToggled"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchLaterToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub watch_later: bool,
}

impl WatchLaterToggled {
    pub fn new(movie_id: i64, watch_later: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            watch_later,
        }
    }
}

impl DomainEvent for WatchLaterToggled {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "WatchLaterToggled"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub movie_id: i64,
    pub username: String,
}

impl CommentAdded {
    pub fn new(movie_id: i64, username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            movie_id,
            username,
        }
    }
}

impl DomainEvent for CommentAdded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "CommentAdded"
    }
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// Emitted when the active session is ended through the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub user_id: String,
}

impl SessionEnded {
    pub fn new(user_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id,
        }
    }
}

impl DomainEvent for SessionEnded {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionEnded"
    }
}
