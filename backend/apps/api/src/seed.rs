//! Startup seed data
//!
//! Five sample books and the `admin` account. Every step checks before it
//! inserts, so running it on each start is harmless.

use anyhow::Context;
use auth::domain::entity::user::NewUser;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::{email::Email, user_name::UserName};
use catalog::application::BookInput;
use catalog::domain::repository::BookRepository;
use chrono::{NaiveDate, Utc};
use platform::password::{ClearTextPassword, PasswordService};

pub const ADMIN_USER_NAME: &str = "admin";
pub const ADMIN_EMAIL: &str = "admin@library.com";
pub const ADMIN_PASSWORD: &str = "password123";

/// (title, author, isbn, published)
const SAMPLE_BOOKS: [(&str, &str, &str, (i32, u32, u32)); 5] = [
    (
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "9780743273565",
        (1925, 4, 10),
    ),
    (
        "To Kill a Mockingbird",
        "Harper Lee",
        "9780061120084",
        (1960, 7, 11),
    ),
    ("1984", "George Orwell", "9780451524935", (1949, 6, 8)),
    (
        "Pride and Prejudice",
        "Jane Austen",
        "9780141439518",
        (1813, 1, 28),
    ),
    (
        "The Catcher in the Rye",
        "J.D. Salinger",
        "9780316769174",
        (1951, 7, 16),
    ),
];

/// Seed counts, for the startup log
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub books_inserted: usize,
    pub admin_inserted: bool,
}

/// Insert whatever part of the seed data is missing
pub async fn seed<U, B>(
    users: &U,
    books: &B,
    passwords: &PasswordService,
) -> anyhow::Result<SeedReport>
where
    U: UserRepository + Send + Sync,
    B: BookRepository + Send + Sync,
{
    let mut report = SeedReport::default();

    for (title, author, isbn, (year, month, day)) in SAMPLE_BOOKS {
        let published_date = NaiveDate::from_ymd_opt(year, month, day)
            .with_context(|| format!("invalid seed date for {title}"))?;

        let draft = BookInput {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            published_date,
        }
        .into_draft()?;

        if books.exists_by_isbn(&draft.isbn, None).await? {
            continue;
        }
        books.create(&draft, Utc::now()).await?;
        report.books_inserted += 1;
    }

    let user_name = UserName::new(ADMIN_USER_NAME)?;
    let email = Email::new(ADMIN_EMAIL)?;

    if !users.exists_by_user_name_or_email(&user_name, &email).await? {
        let password = ClearTextPassword::new(ADMIN_PASSWORD.to_string())?;
        let password_hash = passwords.hash(password).await?;
        users
            .create(&NewUser::new(user_name, email, password_hash))
            .await?;
        report.admin_inserted = true;
    }

    Ok(report)
}
