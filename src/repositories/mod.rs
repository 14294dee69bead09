// src/repositories/mod.rs
pub mod like_repository;

pub use like_repository::{LikeRepository, LikedMoviesDoc, RestLikeRepository};

#[cfg(test)]
pub use like_repository::MockLikeRepository;
