//! Book Entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::value_object::{BookId, author::Author, isbn::Isbn, title::Title};

/// Persisted book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Store-assigned identity
    pub book_id: BookId,
    pub title: Title,
    pub author: Author,
    /// Unique across all books
    pub isbn: Isbn,
    pub published_date: NaiveDate,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Bumped on every update
    pub updated_at: DateTime<Utc>,
}

/// The four caller-controlled fields, shared by create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: Title,
    pub author: Author,
    pub isbn: Isbn,
    pub published_date: NaiveDate,
}

impl BookDraft {
    /// New book stamped with `now` for both timestamps
    pub fn into_book(self, book_id: BookId, now: DateTime<Utc>) -> Book {
        Book {
            book_id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            published_date: self.published_date,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Book {
    /// Overwrite the mutable fields and bump `updated_at`
    pub fn apply(&mut self, draft: BookDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.author = draft.author;
        self.isbn = draft.isbn;
        self.published_date = draft.published_date;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(isbn: &str) -> BookDraft {
        BookDraft {
            title: Title::new("1984").unwrap(),
            author: Author::new("George Orwell").unwrap(),
            isbn: Isbn::new(isbn).unwrap(),
            published_date: NaiveDate::from_ymd_opt(1949, 6, 8).unwrap(),
        }
    }

    #[test]
    fn test_new_book_timestamps_match() {
        let now = Utc::now();
        let book = draft("9780451524935").into_book(BookId::new(1), now);
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn test_apply_keeps_created_at() {
        let created = Utc::now();
        let mut book = draft("9780451524935").into_book(BookId::new(1), created);

        let later = created + Duration::minutes(5);
        book.apply(draft("9780451524936"), later);

        assert_eq!(book.created_at, created);
        assert_eq!(book.updated_at, later);
        assert_eq!(book.isbn.as_str(), "9780451524936");
    }
}
