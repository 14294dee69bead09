// src/repositories/like_repository.rs
//
// PersistenceBridge: remote per-user "liked movies" document store.
// Write-only in this scope; nothing is read back into the catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// One user's liked-movies document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LikedMoviesDoc {
    #[serde(rename = "likedMovies")]
    pub liked_movies: Vec<i64>,
}

impl LikedMoviesDoc {
    /// Union-append: the movie id ends up present exactly once.
    pub fn union(mut self, movie_id: i64) -> Self {
        if !self.liked_movies.contains(&movie_id) {
            self.liked_movies.push(movie_id);
        }
        self
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Ensure the movie id is present in the user's liked-movies set,
    /// creating the user's document if absent.
    async fn add_liked_movie(&self, user_id: &str, movie_id: i64) -> AppResult<()>;
}

/// Document-store backed implementation, one document per user under
/// `{base_url}/likes/{user_id}`.
pub struct RestLikeRepository {
    base_url: String,
    http_client: Client,
}

impl RestLikeRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    fn doc_url(&self, user_id: &str) -> String {
        format!("{}/likes/{}", self.base_url, user_id)
    }

    /// Fetch the user's document; a missing document is not an error.
    async fn get_doc(&self, user_id: &str) -> AppResult<Option<LikedMoviesDoc>> {
        let response = self
            .http_client
            .get(self.doc_url(user_id))
            .send()
            .await
            .map_err(|e| AppError::PersistenceWrite(format!("read failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::PersistenceWrite(format!(
                "read returned status: {}",
                response.status()
            )));
        }

        let doc = response
            .json::<LikedMoviesDoc>()
            .await
            .map_err(|e| AppError::PersistenceWrite(format!("malformed document: {}", e)))?;
        Ok(Some(doc))
    }

    async fn put_doc(&self, user_id: &str, doc: &LikedMoviesDoc) -> AppResult<()> {
        let response = self
            .http_client
            .put(self.doc_url(user_id))
            .json(doc)
            .send()
            .await
            .map_err(|e| AppError::PersistenceWrite(format!("write failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::PersistenceWrite(format!(
                "write returned status: {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for RestLikeRepository {
    async fn add_liked_movie(&self, user_id: &str, movie_id: i64) -> AppResult<()> {
        let doc = self.get_doc(user_id).await?.unwrap_or_default();
        let doc = doc.union(movie_id);
        self.put_doc(user_id, &doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_appends_once() {
        let doc = LikedMoviesDoc::default().union(7).union(7).union(3);
        assert_eq!(doc.liked_movies, vec![7, 3]);
    }

    #[test]
    fn test_union_preserves_existing_order() {
        let doc = LikedMoviesDoc {
            liked_movies: vec![1, 2, 3],
        };
        let doc = doc.union(2);
        assert_eq!(doc.liked_movies, vec![1, 2, 3]);
    }

    #[test]
    fn test_doc_serializes_with_wire_field_name() {
        let doc = LikedMoviesDoc {
            liked_movies: vec![42],
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"likedMovies":[42]}"#);
    }
}
