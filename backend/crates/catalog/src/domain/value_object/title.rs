//! Title Value Object

use std::fmt;

use super::bounded_text;
use crate::error::CatalogResult;

/// Maximum title length (in characters)
pub const TITLE_MAX_LENGTH: usize = 200;

/// Book title
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        bounded_text("Title", value.into(), TITLE_MAX_LENGTH).map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(Title::new("Dune").is_ok());
        assert!(Title::new("x".repeat(TITLE_MAX_LENGTH)).is_ok());
        assert!(Title::new("x".repeat(TITLE_MAX_LENGTH + 1)).is_err());
        assert!(Title::new("  ").is_err());
    }
}
