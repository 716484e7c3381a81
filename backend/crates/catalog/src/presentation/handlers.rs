//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::page::{PageRequest, PagedResponse};
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksInput, ListBooksUseCase,
    UpdateBookUseCase,
};
use crate::domain::repository::BookRepository;
use crate::domain::value_object::BookId;
use crate::error::CatalogResult;
use crate::presentation::dto::{BookRequest, BookResponse, ListBooksQuery};
use crate::presentation::router::BOOKS_PATH;

/// Shared state for catalog handlers
pub struct CatalogAppState<B>
where
    B: BookRepository + Send + Sync + 'static,
{
    pub repo: Arc<B>,
}

impl<B> Clone for CatalogAppState<B>
where
    B: BookRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

/// POST /api/books
pub async fn create_book<B>(
    State(state): State<CatalogAppState<B>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> CatalogResult<impl IntoResponse>
where
    B: BookRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let book = CreateBookUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    let location = format!("{BOOKS_PATH}/{}", book.book_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::ok(
            "Book created successfully",
            BookResponse::from(book),
        )),
    ))
}

/// GET /api/books?pageNumber=&pageSize=&search=
pub async fn list_books<B>(
    State(state): State<CatalogAppState<B>>,
    query: Result<Query<ListBooksQuery>, QueryRejection>,
) -> CatalogResult<Json<ApiResponse<PagedResponse<BookResponse>>>>
where
    B: BookRepository + Send + Sync + 'static,
{
    let Query(query) = query?;

    let page = ListBooksUseCase::new(state.repo.clone())
        .execute(ListBooksInput {
            page: PageRequest::clamped(query.page_number, query.page_size),
            search: query.search,
        })
        .await?;

    Ok(Json(ApiResponse::ok(
        "Books retrieved successfully",
        page.map(BookResponse::from).into(),
    )))
}

/// GET /api/books/{id}
pub async fn get_book<B>(
    State(state): State<CatalogAppState<B>>,
    id: Result<Path<i64>, PathRejection>,
) -> CatalogResult<Json<ApiResponse<BookResponse>>>
where
    B: BookRepository + Send + Sync + 'static,
{
    let Path(id) = id?;

    let book = GetBookUseCase::new(state.repo.clone())
        .execute(BookId::new(id))
        .await?;

    Ok(Json(ApiResponse::ok(
        "Book retrieved successfully",
        book.into(),
    )))
}

/// PUT /api/books/{id}
pub async fn update_book<B>(
    State(state): State<CatalogAppState<B>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> CatalogResult<Json<ApiResponse<BookResponse>>>
where
    B: BookRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = payload?;

    let book = UpdateBookUseCase::new(state.repo.clone())
        .execute(BookId::new(id), req.into())
        .await?;

    Ok(Json(ApiResponse::ok(
        "Book updated successfully",
        book.into(),
    )))
}

/// DELETE /api/books/{id}
pub async fn delete_book<B>(
    State(state): State<CatalogAppState<B>>,
    id: Result<Path<i64>, PathRejection>,
) -> CatalogResult<Json<ApiResponse<bool>>>
where
    B: BookRepository + Send + Sync + 'static,
{
    let Path(id) = id?;

    let deleted = DeleteBookUseCase::new(state.repo.clone())
        .execute(BookId::new(id))
        .await?;

    Ok(Json(ApiResponse::ok("Book deleted successfully", deleted)))
}
