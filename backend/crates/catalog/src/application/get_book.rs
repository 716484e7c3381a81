//! Get Book Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{CatalogError, CatalogResult};

pub struct GetBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> GetBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, book_id: BookId) -> CatalogResult<Book> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or(CatalogError::BookNotFound(book_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryBookRepository;

    #[tokio::test]
    async fn test_missing_book_not_found() {
        let repo = Arc::new(InMemoryBookRepository::new());
        let result = GetBookUseCase::new(repo).execute(BookId::new(99)).await;
        assert!(matches!(result, Err(CatalogError::BookNotFound(id)) if id.get() == 99));
    }
}
