//! Author Value Object

use std::fmt;

use super::bounded_text;
use crate::error::CatalogResult;

/// Maximum author length (in characters)
pub const AUTHOR_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author(String);

impl Author {
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        bounded_text("Author", value.into(), AUTHOR_MAX_LENGTH).map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
