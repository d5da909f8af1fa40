//! Book library service
//!
//! Books held in memory, exposed over HTTP with JSON bodies and the book id
//! in the path.

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod store;

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::LibraryError;
pub use models::{Book, BookDetail, BookSummary};
pub use store::LibraryStore;

/// Shared state for library handlers
#[derive(Debug, Default)]
pub struct LibraryState {
    pub store: LibraryStore,
}

impl LibraryState {
    pub fn new(store: LibraryStore) -> Self {
        Self { store }
    }

    pub fn seeded() -> Self {
        Self::new(LibraryStore::seeded())
    }
}

/// Build the library router, docs included.
pub fn router(state: Arc<LibraryState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/books/{book_id}",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::LibraryApiDoc::openapi()))
        .layer(middleware::from_fn(crate::gateway::request_logging))
}
