//! Domain Layer
//!
//! Contains the book entity, value objects, and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::book::{Book, BookDraft};
pub use repository::BookRepository;
