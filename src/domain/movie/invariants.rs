use super::entity::MovieRecord;
use crate::domain::{DomainError, DomainResult};

/// Validates all MovieRecord invariants.
pub fn validate_movie(movie: &MovieRecord) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_category(&movie.category)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Category is always present; saga may be absent
fn validate_category(category: &str) -> DomainResult<()> {
    if category.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie category cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Comment text must be non-empty. Empty comments were accepted in earlier
/// iterations of the dashboard; the policy here is explicit rejection.
pub fn validate_comment_text(text: &str) -> DomainResult<()> {
    if text.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Comment text cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, category: &str) -> MovieRecord {
        MovieRecord::new(
            1,
            title.to_string(),
            category.to_string(),
            None,
            "https://example.com/poster.jpg".to_string(),
            None,
            "overview".to_string(),
            "2013-07-19".to_string(),
        )
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_movie(&movie("El Conjuro", "Terror")).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        assert!(validate_movie(&movie("   ", "Terror")).is_err());
    }

    #[test]
    fn test_empty_category_fails() {
        assert!(validate_movie(&movie("El Conjuro", "")).is_err());
    }

    #[test]
    fn test_empty_comment_text_rejected() {
        assert!(validate_comment_text("").is_err());
        assert!(validate_comment_text("   ").is_err());
        assert!(validate_comment_text("¡Qué miedo!").is_ok());
    }
}
