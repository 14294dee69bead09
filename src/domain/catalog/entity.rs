use serde::{Deserialize, Serialize};

use crate::domain::movie::{validate_comment_text, Comment, MovieRecord};
use crate::domain::{DomainError, DomainResult};

/// The working set of movie records currently visible to a session.
///
/// A Catalog is an immutable snapshot: every mutation returns a new
/// Catalog with exactly one record changed and all others untouched.
/// Records never share sub-objects across snapshots, so mutating one
/// snapshot can never alias into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Build a catalog from an already-normalized record sequence.
    /// Fails if two records share an id.
    pub fn new(records: Vec<MovieRecord>) -> DomainResult<Self> {
        let catalog = Self { records };
        super::invariants::validate_catalog(&catalog)?;
        Ok(catalog)
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&MovieRecord> {
        self.records.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Flip the favorite flag on the matching record.
    pub fn toggle_favorite(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| movie.is_favorite = !movie.is_favorite)
    }

    /// Flip the watch-later flag on the matching record.
    pub fn toggle_watch_later(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| movie.watch_later = !movie.watch_later)
    }

    pub fn add_like(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| movie.likes += 1)
    }

    pub fn add_dislike(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| movie.dislikes += 1)
    }

    /// Decrement likes, clamped at 0.
    pub fn remove_like(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| movie.likes = movie.likes.saturating_sub(1))
    }

    /// Decrement dislikes, clamped at 0.
    pub fn remove_dislike(&self, id: i64) -> DomainResult<Self> {
        self.with_record(id, |movie| {
            movie.dislikes = movie.dislikes.saturating_sub(1)
        })
    }

    /// Append one comment to the matching record. Prior comments keep
    /// their insertion order; empty text is rejected.
    pub fn add_comment(&self, id: i64, username: &str, text: &str) -> DomainResult<Self> {
        validate_comment_text(text)?;
        self.with_record(id, |movie| {
            movie.comments.push(Comment {
                username: username.to_string(),
                text: text.to_string(),
            })
        })
    }

    /// Apply a closure to the record with the given id, producing a new
    /// snapshot. Exactly one record changes per call; id uniqueness
    /// guarantees the closure runs at most once.
    fn with_record<F>(&self, id: i64, mut apply: F) -> DomainResult<Self>
    where
        F: FnMut(&mut MovieRecord),
    {
        if !self.contains(id) {
            return Err(DomainError::NotFound(format!("movie {}", id)));
        }

        let records = self
            .records
            .iter()
            .map(|movie| {
                let mut movie = movie.clone();
                if movie.id == id {
                    apply(&mut movie);
                }
                movie
            })
            .collect();

        Ok(Self { records })
    }
}
