// src/domain/movie/mod.rs
pub mod entity;
pub mod invariants;

pub use entity::{seed_movies, Comment, MovieRecord};
pub use invariants::{validate_comment_text, validate_movie};
