//! Library HTTP handlers

use std::sync::Arc;

use axum::{Json, extract::State};

use super::LibraryState;
use super::models::{Book, BookDetail, BookSummary};
use crate::gateway::{ApiResult, ErrorBody, HealthResponse, JsonBody, MessageResponse, PathParam};

pub const SERVICE_NAME: &str = "library";

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now(SERVICE_NAME))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    request_body = Book,
    responses(
        (status = 200, description = "Book created", body = BookDetail),
        (status = 422, description = "Invalid body", body = ErrorBody)
    ),
    tag = "Books"
)]
pub async fn create_book(
    State(state): State<Arc<LibraryState>>,
    JsonBody(book): JsonBody<Book>,
) -> ApiResult<BookDetail> {
    let detail = state.store.create(book);
    tracing::info!("[library] book {} created: {}", detail.id, detail.title);
    Ok(Json(detail))
}

/// List books (summary view)
#[utoipa::path(
    get,
    path = "/books",
    responses((status = 200, description = "All books, title and author only", body = Vec<BookSummary>)),
    tag = "Books"
)]
pub async fn list_books(State(state): State<Arc<LibraryState>>) -> Json<Vec<BookSummary>> {
    Json(state.store.list())
}

/// Get one book (detail view)
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    params(("book_id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetail),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 422, description = "Invalid book ID", body = ErrorBody)
    ),
    tag = "Books"
)]
pub async fn get_book(
    State(state): State<Arc<LibraryState>>,
    PathParam(book_id): PathParam<i64>,
) -> ApiResult<BookDetail> {
    let detail = state
        .store
        .get(book_id)
        .inspect_err(|_| tracing::debug!("[library] book {} not found", book_id))?;
    Ok(Json(detail))
}

/// Replace a book
///
/// The body's id is stored as given, even when it differs from the path.
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    params(("book_id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book replaced", body = BookDetail),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 422, description = "Invalid body or book ID", body = ErrorBody)
    ),
    tag = "Books"
)]
pub async fn update_book(
    State(state): State<Arc<LibraryState>>,
    PathParam(book_id): PathParam<i64>,
    JsonBody(book): JsonBody<Book>,
) -> ApiResult<BookDetail> {
    let detail = state.store.update(book_id, book)?;
    tracing::info!("[library] book {} replaced by book {}", book_id, detail.id);
    Ok(Json(detail))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    params(("book_id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 422, description = "Invalid book ID", body = ErrorBody)
    ),
    tag = "Books"
)]
pub async fn delete_book(
    State(state): State<Arc<LibraryState>>,
    PathParam(book_id): PathParam<i64>,
) -> ApiResult<MessageResponse> {
    state.store.delete(book_id)?;
    tracing::info!("[library] book {} deleted", book_id);
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
