//! In-Memory Repository
//!
//! Backs tests and database-less local runs. Enforces ISBN uniqueness like
//! the PostgreSQL schema. Search and ordering use plain `str` comparison,
//! so both are case-sensitive.

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use kernel::page::{Page, PageRequest};

use crate::domain::entity::book::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{BookId, isbn::Isbn};
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
struct State {
    books: Vec<Book>,
    next_id: i64,
}

impl State {
    fn isbn_taken(&self, isbn: &Isbn, excluding: Option<BookId>) -> bool {
        self.books
            .iter()
            .any(|b| &b.isbn == isbn && Some(b.book_id) != excluding)
    }
}

/// Vec-backed book store
#[derive(Default)]
pub struct InMemoryBookRepository {
    state: Mutex<State>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.lock()?.books.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| CatalogError::Internal("book store lock poisoned".to_string()))
    }
}

impl BookRepository for InMemoryBookRepository {
    async fn create(&self, draft: &BookDraft, now: DateTime<Utc>) -> CatalogResult<Book> {
        let mut state = self.lock()?;

        if state.isbn_taken(&draft.isbn, None) {
            return Err(CatalogError::IsbnTaken);
        }

        state.next_id += 1;
        let book = draft.clone().into_book(BookId::new(state.next_id), now);
        state.books.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, book_id: BookId) -> CatalogResult<Option<Book>> {
        let state = self.lock()?;
        Ok(state.books.iter().find(|b| b.book_id == book_id).cloned())
    }

    async fn exists_by_isbn(&self, isbn: &Isbn, excluding: Option<BookId>) -> CatalogResult<bool> {
        Ok(self.lock()?.isbn_taken(isbn, excluding))
    }

    async fn update(
        &self,
        book_id: BookId,
        draft: &BookDraft,
        now: DateTime<Utc>,
    ) -> CatalogResult<Option<Book>> {
        let mut state = self.lock()?;

        if state.isbn_taken(&draft.isbn, Some(book_id)) {
            return Err(CatalogError::IsbnTaken);
        }

        let Some(book) = state.books.iter_mut().find(|b| b.book_id == book_id) else {
            return Ok(None);
        };
        book.apply(draft.clone(), now);
        Ok(Some(book.clone()))
    }

    async fn delete(&self, book_id: BookId) -> CatalogResult<bool> {
        let mut state = self.lock()?;
        let before = state.books.len();
        state.books.retain(|b| b.book_id != book_id);
        Ok(state.books.len() < before)
    }

    async fn list(&self, page: PageRequest, search: Option<&str>) -> CatalogResult<Page<Book>> {
        let state = self.lock()?;

        let mut matching: Vec<&Book> = state
            .books
            .iter()
            .filter(|b| match search {
                Some(term) => b.title.as_str().contains(term) || b.author.as_str().contains(term),
                None => true,
            })
            .collect();
        matching.sort_by(|a, b| a.title.cmp(&b.title).then(a.book_id.cmp(&b.book_id)));

        let total_count = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        Ok(Page::new(items, page, total_count))
    }
}
