//! Catalog Backend Module
//!
//! Book CRUD with paging and search.
//!
//! Clean Architecture structure:
//! - `domain/` - Book entity, value objects, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! The router carries no authentication of its own; callers wrap it in a
//! bearer check.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::{InMemoryBookRepository, PgBookRepository};
pub use presentation::{BOOKS_PATH, CatalogAppState, catalog_router};
