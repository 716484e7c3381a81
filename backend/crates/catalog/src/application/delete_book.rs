//! Delete Book Use Case

use std::sync::Arc;

use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{CatalogError, CatalogResult};

pub struct DeleteBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> DeleteBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    /// Hard delete. Always `Ok(true)` on success.
    pub async fn execute(&self, book_id: BookId) -> CatalogResult<bool> {
        if !self.book_repo.delete(book_id).await? {
            return Err(CatalogError::BookNotFound(book_id));
        }

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(true)
    }
}
