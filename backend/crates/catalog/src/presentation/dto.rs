//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::application::BookInput;
use crate::domain::entity::book::Book;

// ============================================================================
// Requests
// ============================================================================

/// Create and update request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    #[serde(deserialize_with = "calendar_date")]
    pub published_date: NaiveDate,
}

impl From<BookRequest> for BookInput {
    fn from(req: BookRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            isbn: req.isbn,
            published_date: req.published_date,
        }
    }
}

/// `GET /api/books` query string; clamping happens in the handler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
}

/// Accepts `2024-01-31`, `2024-01-31T00:00:00` or an RFC 3339 timestamp and
/// keeps only the date.
fn calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = raw.parse::<NaiveDateTime>() {
        return Ok(timestamp.date());
    }

    Err(serde::de::Error::custom(format!(
        "invalid publishedDate '{raw}', expected YYYY-MM-DD"
    )))
}

// ============================================================================
// Responses
// ============================================================================

/// Book as returned by every endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.book_id.get(),
            title: book.title.as_str().to_string(),
            author: book.author.as_str().to_string(),
            isbn: book.isbn.as_str().to_string(),
            published_date: book.published_date,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}
