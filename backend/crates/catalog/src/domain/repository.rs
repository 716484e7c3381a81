//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::page::{Page, PageRequest};

use crate::domain::entity::book::{Book, BookDraft};
use crate::domain::value_object::{BookId, isbn::Isbn};
use crate::error::CatalogResult;

/// Book repository trait
///
/// `create` and `update` must fail with
/// [`CatalogError::IsbnTaken`](crate::error::CatalogError::IsbnTaken) when the
/// store rejects a duplicate ISBN, regardless of any earlier check.
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// Insert a new book with `created_at = updated_at = now`
    async fn create(&self, draft: &BookDraft, now: DateTime<Utc>) -> CatalogResult<Book>;

    async fn find_by_id(&self, book_id: BookId) -> CatalogResult<Option<Book>>;

    /// Whether any book other than `excluding` has this ISBN
    async fn exists_by_isbn(&self, isbn: &Isbn, excluding: Option<BookId>) -> CatalogResult<bool>;

    /// Overwrite the four mutable fields; `None` if the id does not exist
    async fn update(
        &self,
        book_id: BookId,
        draft: &BookDraft,
        now: DateTime<Utc>,
    ) -> CatalogResult<Option<Book>>;

    /// Hard delete; `false` if the id does not exist
    async fn delete(&self, book_id: BookId) -> CatalogResult<bool>;

    /// One page ordered by title then id, optionally filtered by a
    /// case-sensitive substring of title or author
    async fn list(&self, page: PageRequest, search: Option<&str>) -> CatalogResult<Page<Book>>;
}
