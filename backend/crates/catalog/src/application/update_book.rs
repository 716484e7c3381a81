//! Update Book Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::BookInput;
use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::{CatalogError, CatalogResult};

pub struct UpdateBookUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> UpdateBookUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, book_id: BookId, input: BookInput) -> CatalogResult<Book> {
        let draft = input.into_draft()?;

        if self.book_repo.find_by_id(book_id).await?.is_none() {
            return Err(CatalogError::BookNotFound(book_id));
        }

        // Keeping its own ISBN is fine; taking another book's is not
        if self
            .book_repo
            .exists_by_isbn(&draft.isbn, Some(book_id))
            .await?
        {
            return Err(CatalogError::IsbnTaken);
        }

        // Deleted between the lookup and the write
        let book = self
            .book_repo
            .update(book_id, &draft, Utc::now())
            .await?
            .ok_or(CatalogError::BookNotFound(book_id))?;

        tracing::info!(book_id = %book.book_id, isbn = %book.isbn, "Book updated");

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::create_book::CreateBookUseCase;
    use crate::application::test_support::{RacingRepository, book};
    use crate::infra::memory::InMemoryBookRepository;

    async fn seeded() -> (Arc<InMemoryBookRepository>, Book, Book) {
        let repo = Arc::new(InMemoryBookRepository::new());
        let create = CreateBookUseCase::new(repo.clone());
        let first = create
            .execute(book("1984", "George Orwell", "9780451524935"))
            .await
            .unwrap();
        let second = create
            .execute(book("Dune", "Frank Herbert", "9780441013593"))
            .await
            .unwrap();
        (repo, first, second)
    }

    #[tokio::test]
    async fn test_update_keeping_own_isbn() {
        let (repo, first, _) = seeded().await;

        let updated = UpdateBookUseCase::new(repo.clone())
            .execute(
                first.book_id,
                book("Nineteen Eighty-Four", "George Orwell", "9780451524935"),
            )
            .await
            .unwrap();

        assert_eq!(updated.title.as_str(), "Nineteen Eighty-Four");
        assert_eq!(updated.created_at, first.created_at);
        assert!(updated.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_update_to_other_books_isbn_conflicts() {
        let (repo, first, second) = seeded().await;

        let result = UpdateBookUseCase::new(repo.clone())
            .execute(first.book_id, book("1984", "George Orwell", second.isbn.as_str()))
            .await;
        assert!(matches!(result, Err(CatalogError::IsbnTaken)));

        let unchanged = repo.find_by_id(first.book_id).await.unwrap().unwrap();
        assert_eq!(unchanged, first);
    }

    #[tokio::test]
    async fn test_update_missing_book_not_found() {
        let (repo, _, _) = seeded().await;
        let result = UpdateBookUseCase::new(repo)
            .execute(BookId::new(404), book("Ghost", "Nobody", "0000000000000"))
            .await;
        assert!(matches!(result, Err(CatalogError::BookNotFound(_))));
    }

    #[tokio::test]
    async fn test_store_uniqueness_violation_on_update_is_conflict() {
        let repo = Arc::new(RacingRepository(InMemoryBookRepository::new()));
        let create = CreateBookUseCase::new(repo.clone());
        let first = create
            .execute(book("1984", "George Orwell", "9780451524935"))
            .await
            .unwrap();
        let second = create
            .execute(book("Dune", "Frank Herbert", "9780441013593"))
            .await
            .unwrap();

        let result = UpdateBookUseCase::new(repo.clone())
            .execute(first.book_id, book("1984", "George Orwell", second.isbn.as_str()))
            .await;
        assert!(matches!(result, Err(CatalogError::IsbnTaken)));

        let unchanged = repo.find_by_id(first.book_id).await.unwrap().unwrap();
        assert_eq!(unchanged, first);
    }
}
