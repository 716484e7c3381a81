//! PostgreSQL Repository Implementations
//!
//! Search uses `strpos`, which is case-sensitive. Titles sort with
//! `COLLATE "C"` (byte order), then by id.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::page::{Page, PageRequest};
use sqlx::PgPool;

use crate::domain::entity::book::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::{BookId, author::Author, isbn::Isbn, title::Title};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a duplicate ISBN rejected by the unique index to a conflict
fn isbn_conflict(err: sqlx::Error) -> CatalogError {
    if is_unique_violation(&err) {
        CatalogError::IsbnTaken
    } else {
        CatalogError::Database(err)
    }
}

const SEARCH_FILTER: &str = "($1::text IS NULL OR strpos(title, $1) > 0 OR strpos(author, $1) > 0)";

// ============================================================================
// Book Repository Implementation
// ============================================================================

impl BookRepository for PgBookRepository {
    async fn create(&self, draft: &BookDraft, now: DateTime<Utc>) -> CatalogResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (
                title,
                author,
                isbn,
                published_date,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING
                id,
                title,
                author,
                isbn,
                published_date,
                created_at,
                updated_at
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.isbn.as_str())
        .bind(draft.published_date)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(isbn_conflict)?;

        Ok(row.into_book())
    }

    async fn find_by_id(&self, book_id: BookId) -> CatalogResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                id,
                title,
                author,
                isbn,
                published_date,
                created_at,
                updated_at
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn exists_by_isbn(&self, isbn: &Isbn, excluding: Option<BookId>) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1 AND ($2::bigint IS NULL OR id <> $2))",
        )
        .bind(isbn.as_str())
        .bind(excluding.map(|id| id.get()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(
        &self,
        book_id: BookId,
        draft: &BookDraft,
        now: DateTime<Utc>,
    ) -> CatalogResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books SET
                title = $2,
                author = $3,
                isbn = $4,
                published_date = $5,
                updated_at = $6
            WHERE id = $1
            RETURNING
                id,
                title,
                author,
                isbn,
                published_date,
                created_at,
                updated_at
            "#,
        )
        .bind(book_id.get())
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.isbn.as_str())
        .bind(draft.published_date)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(isbn_conflict)?;

        Ok(row.map(BookRow::into_book))
    }

    async fn delete(&self, book_id: BookId) -> CatalogResult<bool> {
        let deleted = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(book_id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn list(&self, page: PageRequest, search: Option<&str>) -> CatalogResult<Page<Book>> {
        let total_count: i64 =
            sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM books WHERE {SEARCH_FILTER}"))
                .bind(search)
                .fetch_one(&self.pool)
                .await?;

        let rows = sqlx::query_as::<_, BookRow>(&format!(
            r#"
            SELECT
                id,
                title,
                author,
                isbn,
                published_date,
                created_at,
                updated_at
            FROM books
            WHERE {SEARCH_FILTER}
            ORDER BY title COLLATE "C", id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(search)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(
            rows.into_iter().map(BookRow::into_book).collect(),
            page,
            total_count.max(0) as u64,
        ))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    isbn: String,
    published_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            book_id: BookId::new(self.id),
            title: Title::from_db(self.title),
            author: Author::from_db(self.author),
            isbn: Isbn::from_db(self.isbn),
            published_date: self.published_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
