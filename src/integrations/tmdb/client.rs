// src/integrations/tmdb/client.rs
//
// Movie-discovery API integration.
//
// - HTTP client for the third-party metadata endpoint
// - Maps external data → internal DTOs (NO domain mutation)
// - Used by IngestionService
//
// This is INFRASTRUCTURE, not DOMAIN: it never creates or modifies
// domain entities directly, it returns DTOs that services can map.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_LANGUAGE: &str = "es-ES";

/// Genre tags requested from the discovery endpoint, in inference
/// priority order: horror first, then fantasy, then romance.
pub const GENRE_HORROR: i64 = 27;
pub const GENRE_FANTASY: i64 = 14;
pub const GENRE_ROMANCE: i64 = 10749;

/// One movie object as returned by the discovery endpoint.
///
/// The parse is strict: a payload missing any required field fails with
/// a typed decode error instead of propagating undefined values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbMovie {
    pub id: i64,
    pub title: String,
    pub genre_ids: Vec<i64>,
    pub poster_path: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub popularity: f64,
    pub original_language: String,
}

/// Discovery response envelope.
#[derive(Debug, Deserialize)]
struct DiscoverResponse {
    results: Vec<TmdbMovie>,
}

/// Seam between ingestion and the concrete metadata source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch one page of themed movies from the external source.
    async fn discover_movies(&self) -> AppResult<Vec<TmdbMovie>>;
}

/// Movie-discovery API client.
pub struct TmdbClient {
    base_url: String,
    http_client: Client,
    api_key: String,
    language: String,
    with_genres: String,
    page: u32,
}

impl TmdbClient {
    /// Create a client querying the themed genre set (horror, fantasy,
    /// romance), first page, Spanish metadata.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            with_genres: format!("{},{},{}", GENRE_HORROR, GENRE_FANTASY, GENRE_ROMANCE),
            page: 1,
        }
    }

    /// Override the endpoint base URL (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn discover_movies(&self) -> AppResult<Vec<TmdbMovie>> {
        let url = format!("{}/discover/movie", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
                ("with_genres", self.with_genres.as_str()),
                ("page", &self.page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::MetadataApi(format!("discover request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::MetadataApi(format!(
                "discover returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::MetadataApi(format!("failed to read response body: {}", e)))?;

        // Strict decode: malformed payloads surface as typed errors
        let payload: DiscoverResponse = serde_json::from_str(&body)?;

        Ok(payload.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = TmdbClient::new("test-key");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.language, "es-ES");
        assert_eq!(client.with_genres, "27,14,10749");
        assert_eq!(client.page, 1);
    }

    #[test]
    fn test_with_base_url_override() {
        let client = TmdbClient::new("test-key").with_base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_discover_payload_parses() {
        let body = r#"{
            "results": [
                {
                    "id": 631842,
                    "title": "Noche de brujas",
                    "genre_ids": [27, 14],
                    "poster_path": "/abc123.jpg",
                    "overview": "Una noche que no termina.",
                    "release_date": "2023-10-27",
                    "popularity": 812.4,
                    "original_language": "es"
                }
            ]
        }"#;

        let payload: DiscoverResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payload.results.len(), 1);
        assert_eq!(payload.results[0].id, 631842);
        assert_eq!(payload.results[0].genre_ids, vec![27, 14]);
        assert_eq!(payload.results[0].poster_path.as_deref(), Some("/abc123.jpg"));
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        // "id" missing entirely
        let body = r#"{
            "results": [
                {
                    "title": "Sin id",
                    "genre_ids": [],
                    "overview": "",
                    "release_date": "",
                    "popularity": 1.0,
                    "original_language": "es"
                }
            ]
        }"#;

        let parsed: Result<DiscoverResponse, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_secondary_fields_are_also_rejected() {
        // The parse is strict for every documented field, not only the
        // ones ingestion consumes
        let body = r#"{
            "results": [
                {
                    "id": 631842,
                    "title": "Noche de brujas",
                    "genre_ids": [27],
                    "overview": "",
                    "release_date": "2023-10-27"
                }
            ]
        }"#;

        let parsed: Result<DiscoverResponse, _> = serde_json::from_str(body);
        assert!(parsed.is_err());
    }
}
