//! List Books Use Case
//!
//! Paging arrives already clamped (see [`PageRequest::clamped`]).

use std::sync::Arc;

use kernel::page::{Page, PageRequest};

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct ListBooksInput {
    pub page: PageRequest,
    /// Blank or missing means no filter
    pub search: Option<String>,
}

pub struct ListBooksUseCase<B>
where
    B: BookRepository,
{
    book_repo: Arc<B>,
}

impl<B> ListBooksUseCase<B>
where
    B: BookRepository,
{
    pub fn new(book_repo: Arc<B>) -> Self {
        Self { book_repo }
    }

    pub async fn execute(&self, input: ListBooksInput) -> CatalogResult<Page<Book>> {
        let search = input.search.as_deref().filter(|s| !s.trim().is_empty());
        if search.is_some_and(|s| s.chars().any(char::is_control)) {
            return Err(CatalogError::Validation(
                "Search must not contain control characters".to_string(),
            ));
        }
        self.book_repo.list(input.page, search).await
    }
}
