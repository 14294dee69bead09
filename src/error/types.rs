// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Metadata API error: {0}")]
    MetadataApi(String),

    #[error("Persistence write failed: {0}")]
    PersistenceWrite(String),

    #[error("No active session")]
    Unauthorized,
}

pub type AppResult<T> = Result<T, AppError>;
