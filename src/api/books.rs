//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{BookDetails, BookQuery, BookWithStatus},
};

use super::parse_id;

/// List books with derived availability
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books with derived status", body = Vec<BookWithStatus>),
        (status = 500, description = "Server error")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<BookWithStatus>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books))
}

/// Get book details with its copies and derived availability
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book with copies and derived status", body = BookDetails),
        (status = 400, description = "Malformed book id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookDetails>> {
    let id = parse_id(&id, "book")?;
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}
