//! Catalog Router

use axum::{Router, routing::get};

use crate::domain::repository::BookRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Mount point of the catalog router, also used to build `Location` headers
pub const BOOKS_PATH: &str = "/api/books";

/// Create the Catalog router for any repository implementation
///
/// Nest it under [`BOOKS_PATH`].
pub fn catalog_router<B>(state: CatalogAppState<B>) -> Router
where
    B: BookRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_books::<B>).post(handlers::create_book::<B>),
        )
        .route(
            "/{id}",
            get(handlers::get_book::<B>)
                .put(handlers::update_book::<B>)
                .delete(handlers::delete_book::<B>),
        )
        .with_state(state)
}
