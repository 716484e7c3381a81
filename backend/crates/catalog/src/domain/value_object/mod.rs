//! Value Object Module

pub mod author;
pub mod isbn;
pub mod title;

pub use kernel::id::BookId;

use crate::error::{CatalogError, CatalogResult};

/// Shared rule for the book's text fields: not blank, no control
/// characters, at most `max` characters
pub(crate) fn bounded_text(field: &str, value: String, max: usize) -> CatalogResult<String> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }

    if value.chars().any(char::is_control) {
        return Err(CatalogError::Validation(format!(
            "{field} must not contain control characters"
        )));
    }

    let length = value.chars().count();
    if length > max {
        return Err(CatalogError::Validation(format!(
            "{field} must be at most {max} characters (got {length})"
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_text() {
        assert_eq!(bounded_text("Title", "Dune".into(), 10).unwrap(), "Dune");
        assert!(matches!(
            bounded_text("Title", "   ".into(), 10),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            bounded_text("Title", "Du\0ne".into(), 10),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            bounded_text("Author", "Frank\nHerbert".into(), 20),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            bounded_text("Title", "a".repeat(11), 10),
            Err(CatalogError::Validation(_))
        ));
    }
}
