//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary shared by the `auth` and `catalog`
//! crates:
//! - Common error types and result aliases
//! - Typed integer identifiers for persisted entities
//! - Pagination requests/pages
//! - The JSON response envelope returned by every endpoint
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod page;
pub mod response;
