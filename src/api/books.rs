//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookIdQuery},
};

use super::JsonBody;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books()?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id)?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 409, description = "A book with this id already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonBody(book): JsonBody<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.create_book(book)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book with quantity decremented", body = Book),
        (status = 400, description = "Missing id query parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "No copies available", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = query.require_id()?;
    let book = state.services.catalog.checkout_book(id)?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book with quantity incremented", body = Book),
        (status = 400, description = "Missing id query parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = query.require_id()?;
    let book = state.services.catalog.return_book(id)?;
    Ok(Json(book))
}

/// Remove a book
#[utoipa::path(
    delete,
    path = "/remove",
    tag = "books",
    params(BookIdQuery),
    responses(
        (status = 200, description = "The removed book", body = Book),
        (status = 400, description = "Missing id query parameter", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book(
    State(state): State<crate::AppState>,
    Query(query): Query<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = query.require_id()?;
    let book = state.services.catalog.remove_book(id)?;
    Ok(Json(book))
}
