//! Library API application
//!
//! Wires the auth and catalog crates into one router. `main` adds the
//! database, CORS and the listener.

pub mod seed;

use std::sync::Arc;

use auth::{AuthAppState, TokenService, auth_router, require_bearer};
use auth::domain::repository::UserRepository;
use axum::{Router, middleware, routing::get};
use catalog::domain::repository::BookRepository;
use catalog::{BOOKS_PATH, CatalogAppState, catalog_router};
use platform::password::PasswordService;
use tower_http::trace::TraceLayer;

/// Everything the router needs, already constructed
pub struct AppServices<U, B> {
    pub users: Arc<U>,
    pub books: Arc<B>,
    pub tokens: Arc<TokenService>,
    pub passwords: PasswordService,
}

/// Build the full router
///
/// `/api/books` sits behind the bearer check; `/api/auth` and `/health` do not.
pub fn build_router<U, B>(services: AppServices<U, B>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    B: BookRepository + Send + Sync + 'static,
{
    let auth = auth_router(AuthAppState {
        repo: services.users,
        tokens: services.tokens.clone(),
        passwords: services.passwords,
    });

    let books = catalog_router(CatalogAppState {
        repo: services.books,
    })
    .route_layer(middleware::from_fn_with_state(
        services.tokens,
        require_bearer,
    ));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth)
        .nest(BOOKS_PATH, books)
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> &'static str {
    "ok"
}
