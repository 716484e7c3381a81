//! ISBN Value Object
//!
//! Only the length is checked (1..=13 characters); check digits are not
//! validated. Uniqueness is exact and case-sensitive.

use std::fmt;

use super::bounded_text;
use crate::error::CatalogResult;

/// Maximum ISBN length (ISBN-13)
pub const ISBN_MAX_LENGTH: usize = 13;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(value: impl Into<String>) -> CatalogResult<Self> {
        bounded_text("ISBN", value.into(), ISBN_MAX_LENGTH).map(Self)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
