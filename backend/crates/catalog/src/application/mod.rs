//! Application Layer
//!
//! One use case per catalog operation.

use chrono::NaiveDate;

use crate::domain::entity::book::BookDraft;
use crate::domain::value_object::{author::Author, isbn::Isbn, title::Title};
use crate::error::CatalogResult;

pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

// Re-exports
pub use create_book::CreateBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use get_book::GetBookUseCase;
pub use list_books::{ListBooksInput, ListBooksUseCase};
pub use update_book::UpdateBookUseCase;

/// Raw book fields for create and update
#[derive(Debug, Clone)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: NaiveDate,
}

impl BookInput {
    /// Validate into a draft
    pub fn into_draft(self) -> CatalogResult<BookDraft> {
        Ok(BookDraft {
            title: Title::new(self.title)?,
            author: Author::new(self.author)?,
            isbn: Isbn::new(self.isbn)?,
            published_date: self.published_date,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::BookInput;
    use chrono::{DateTime, NaiveDate, Utc};
    use kernel::page::{Page, PageRequest};

    use crate::domain::entity::book::{Book, BookDraft};
    use crate::domain::repository::BookRepository;
    use crate::domain::value_object::{BookId, isbn::Isbn};
    use crate::error::CatalogResult;
    use crate::infra::memory::InMemoryBookRepository;

    pub fn book(title: &str, author: &str, isbn: &str) -> BookInput {
        BookInput {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_date: NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
        }
    }

    /// Store whose pre-check always passes, as when a concurrent insert wins
    pub struct RacingRepository(pub InMemoryBookRepository);

    impl BookRepository for RacingRepository {
        async fn create(&self, draft: &BookDraft, now: DateTime<Utc>) -> CatalogResult<Book> {
            self.0.create(draft, now).await
        }

        async fn find_by_id(&self, book_id: BookId) -> CatalogResult<Option<Book>> {
            self.0.find_by_id(book_id).await
        }

        async fn exists_by_isbn(
            &self,
            _isbn: &Isbn,
            _excluding: Option<BookId>,
        ) -> CatalogResult<bool> {
            Ok(false)
        }

        async fn update(
            &self,
            book_id: BookId,
            draft: &BookDraft,
            now: DateTime<Utc>,
        ) -> CatalogResult<Option<Book>> {
            self.0.update(book_id, draft, now).await
        }

        async fn delete(&self, book_id: BookId) -> CatalogResult<bool> {
            self.0.delete(book_id).await
        }

        async fn list(&self, page: PageRequest, search: Option<&str>) -> CatalogResult<Page<Book>> {
            self.0.list(page, search).await
        }
    }
}
