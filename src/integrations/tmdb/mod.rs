// src/integrations/tmdb/mod.rs
pub mod client;

pub use client::{
    MovieSource, TmdbClient, TmdbMovie, GENRE_FANTASY, GENRE_HORROR, GENRE_ROMANCE,
};

#[cfg(test)]
pub use client::MockMovieSource;
