use std::collections::HashSet;

use super::entity::Catalog;
use crate::domain::{validate_movie, DomainError, DomainResult};

/// Validates all Catalog invariants:
///
/// 1. Record ids are unique within the working set
/// 2. Every record satisfies its own invariants
pub fn validate_catalog(catalog: &Catalog) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for movie in catalog.records() {
        if !seen.insert(movie.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate movie id {} in catalog",
                movie.id
            )));
        }
        validate_movie(movie)?;
    }
    Ok(())
}
