//! Credibility analysis domain: models, prompt template, normalization.

pub mod model;
pub mod parser;
pub mod prompt;

use crate::error::{CredenceError, CredenceResult};

/// Minimum article length (characters) for a meaningful analysis.
pub const MIN_ARTICLE_CHARS: usize = 10;

/// Maximum accepted article length in characters.
pub const MAX_ARTICLE_CHARS: usize = 50_000;

/// Validate article text before any outbound call is made.
///
/// Returns the trimmed article on success.
pub fn validate_article(text: &str) -> CredenceResult<&str> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(CredenceError::validation("Article text cannot be empty"));
    }

    let chars = trimmed.chars().count();
    if chars < MIN_ARTICLE_CHARS {
        return Err(CredenceError::validation(
            "Article text is too short for meaningful analysis",
        ));
    }
    if chars > MAX_ARTICLE_CHARS {
        return Err(CredenceError::validation(format!(
            "Article text is too long (maximum {} characters)",
            MAX_ARTICLE_CHARS
        )));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_article() {
        let text = "  Scientists confirm the Earth is flat  ";
        let article = validate_article(text).unwrap();
        assert_eq!(article, "Scientists confirm the Earth is flat");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(validate_article("").is_err());
        assert!(validate_article("   \n\t  ").is_err());
    }

    #[test]
    fn test_too_short_rejected() {
        let err = validate_article("Too short").unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_too_long_rejected() {
        let text = "a".repeat(MAX_ARTICLE_CHARS + 1);
        let err = validate_article(&text).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        let min = "a".repeat(MIN_ARTICLE_CHARS);
        assert!(validate_article(&min).is_ok());

        let max = "a".repeat(MAX_ARTICLE_CHARS);
        assert!(validate_article(&max).is_ok());
    }
}
