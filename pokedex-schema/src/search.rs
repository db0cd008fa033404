use std::{
    fmt::Display,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;

use crate::ValidationError;

static SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").unwrap());

/// Checks if the string is a species slug or id, safe to use as a single path segment.
pub fn is_slug(s: &str) -> bool {
    SLUG.is_match(s)
}

/// A normalized free-text search term: trimmed, lowercased, and restricted to the characters
/// species slugs and ids use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes and validates user input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let term = input.trim().to_lowercase();
        if term.is_empty() {
            return Err(ValidationError::at("query", "search term is required"));
        }
        if !is_slug(&term) {
            return Err(ValidationError::at(
                "query",
                "search term may only contain letters, digits, or \"-\"",
            ));
        }
        Ok(Self(term))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SearchTerm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod search_term_test {
    use assert_matches::assert_matches;

    use crate::{
        SearchTerm,
        is_slug,
    };

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(SearchTerm::parse("  Pikachu ").unwrap().as_str(), "pikachu");
        assert_eq!(SearchTerm::parse("Mr-Mime").unwrap().as_str(), "mr-mime");
        assert_eq!(SearchTerm::parse("25").unwrap().as_str(), "25");
    }

    #[test]
    fn rejects_empty_terms() {
        assert_matches!(SearchTerm::parse(""), Err(_));
        assert_matches!(SearchTerm::parse("   "), Err(_));
    }

    #[test]
    fn rejects_unsupported_characters() {
        assert_matches!(SearchTerm::parse("mr. mime"), Err(_));
        assert_matches!(SearchTerm::parse("../type"), Err(_));
        assert_matches!(SearchTerm::parse("pika?chu"), Err(_));
    }

    #[test]
    fn slugs_are_exact() {
        assert!(is_slug("mr-mime"));
        assert!(is_slug("25"));
        assert!(!is_slug("Pikachu"));
        assert!(!is_slug("../type/1"));
        assert!(!is_slug(""));
    }
}
