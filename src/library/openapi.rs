//! OpenAPI document for the library service

use utoipa::OpenApi;

use super::models::{Book, BookDetail, BookSummary};
use crate::gateway::{ErrorBody, HealthResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Book Library API", version = "1.0.0"),
    servers((url = "http://localhost:8001", description = "Development")),
    paths(
        super::handlers::health_check,
        super::handlers::create_book,
        super::handlers::list_books,
        super::handlers::get_book,
        super::handlers::update_book,
        super::handlers::delete_book,
    ),
    components(schemas(
        Book,
        BookDetail,
        BookSummary,
        MessageResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "Books", description = "Book catalog"),
        (name = "System", description = "Health")
    )
)]
pub struct LibraryApiDoc;
