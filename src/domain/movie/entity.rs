use serde::{Deserialize, Serialize};

/// One catalog entry, normalized from the external metadata source
/// or taken from the built-in seed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Identifier from the external source; stable key for all lookups
    pub id: i64,

    pub title: String,

    /// Inferred or externally supplied category label; always present
    pub category: String,

    /// Grouping label linking related titles; absent when no grouping applies
    pub saga: Option<String>,

    /// Presentation-only URIs
    pub poster_url: String,
    pub video_url: Option<String>,

    pub overview: String,

    /// ISO-like date string; not validated beyond presence
    pub release_date: String,

    pub is_favorite: bool,
    pub watch_later: bool,

    pub likes: u32,
    pub dislikes: u32,

    /// Append-only, insertion order preserved, never deduplicated
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
}

impl MovieRecord {
    /// Create a record with user-facing state at its defaults
    /// (no likes, no flags, no comments).
    pub fn new(
        id: i64,
        title: String,
        category: String,
        saga: Option<String>,
        poster_url: String,
        video_url: Option<String>,
        overview: String,
        release_date: String,
    ) -> Self {
        Self {
            id,
            title,
            category,
            saga,
            poster_url,
            video_url,
            overview,
            release_date,
            is_favorite: false,
            watch_later: false,
            likes: 0,
            dislikes: 0,
            comments: Vec::new(),
        }
    }
}

/// Built-in seed catalog, always visible before (and after a failed)
/// remote load. Mirrors the themed launch lineup.
pub fn seed_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(
            1,
            "Harry Potter y la piedra filosofal".to_string(),
            "Fantasía".to_string(),
            Some("Harry Potter".to_string()),
            "https://i.pinimg.com/564x/62/71/5a/62715a1e6adcbc31c6f8c751a63caa5f.jpg".to_string(),
            Some("https://example.com/harry1.mp4".to_string()),
            "El inicio de la saga del joven mago.".to_string(),
            "2001-11-16".to_string(),
        ),
        MovieRecord::new(
            2,
            "Crepúsculo".to_string(),
            "Romance Fantástico".to_string(),
            Some("Crepúsculo".to_string()),
            "https://i.pinimg.com/736x/bc/d9/38/bcd938e3e9cd920961b5f46225bbfb41.jpg".to_string(),
            Some("https://example.com/twilight.mp4".to_string()),
            "Una historia de amor entre una humana y un vampiro.".to_string(),
            "2008-11-21".to_string(),
        ),
        MovieRecord::new(
            3,
            "Los Simpson: La película".to_string(),
            "Animación".to_string(),
            None,
            "https://i.pinimg.com/564x/59/d5/1d/59d51da1f0af020a3170f278b75b007b.jpg".to_string(),
            Some("https://example.com/simpsons.mp4".to_string()),
            "La familia Simpson salva a Springfield de una catástrofe.".to_string(),
            "2007-07-27".to_string(),
        ),
        MovieRecord::new(
            4,
            "El Conjuro".to_string(),
            "Terror".to_string(),
            None,
            "https://i.pinimg.com/736x/98/14/dc/9814dcfafc0438d156c396f1ad911e76.jpg".to_string(),
            Some("https://example.com/conjuring.mp4".to_string()),
            "Basada en casos reales de los Warren.".to_string(),
            "2013-07-19".to_string(),
        ),
        MovieRecord::new(
            5,
            "Hereditary".to_string(),
            "Terror Psicológico".to_string(),
            None,
            "https://i.pinimg.com/564x/ee/02/76/ee0276c8ed47d9470f430fd4189fec1e.jpg".to_string(),
            Some("https://example.com/hereditary.mp4".to_string()),
            "Una familia enfrenta terrores sobrenaturales tras la muerte de la abuela.".to_string(),
            "2018-06-08".to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let movie = MovieRecord::new(
            42,
            "El Conjuro".to_string(),
            "Terror".to_string(),
            None,
            "https://image.tmdb.org/t/p/w500/x.jpg".to_string(),
            None,
            "Basada en casos reales.".to_string(),
            "2013-07-19".to_string(),
        );

        assert_eq!(movie.likes, 0);
        assert_eq!(movie.dislikes, 0);
        assert!(!movie.is_favorite);
        assert!(!movie.watch_later);
        assert!(movie.comments.is_empty());
    }

    #[test]
    fn test_seed_set_has_unique_ids() {
        let seeds = seed_movies();
        let mut ids: Vec<i64> = seeds.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seeds.len());
    }
}
