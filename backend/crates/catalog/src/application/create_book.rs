//! Create Book Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::BookInput;
use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct CreateBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> CreateBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, input: BookInput) -> CatalogResult<Book> {
        let draft = input.into_draft()?;

        // Friendly pre-check; the unique index still decides on insert
        if self.book_repo.exists_by_isbn(&draft.isbn, None).await? {
            return Err(CatalogError::IsbnTaken);
        }

        let book = self.book_repo.create(&draft, Utc::now()).await?;

        tracing::info!(book_id = %book.book_id, isbn = %book.isbn, "Book created");

        Ok(book)
    }
}
