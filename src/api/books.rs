//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, BookQuery, BookShort},
};

use super::{AppJson, AppPath};

const SUCCESS: &str = "success";

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BooksData {
    pub books: Vec<BookShort>,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct CreateBookResponse {
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
pub struct ListBooksResponse {
    pub status: String,
    pub data: BooksData,
}

#[derive(Serialize, ToSchema)]
pub struct GetBookResponse {
    pub status: String,
    pub data: BookData,
}

/// Success envelope without data
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: SUCCESS.to_string(),
            message: message.to_string(),
        }
    }
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = CreateBookResponse),
        (status = 400, description = "Missing name, readPage above pageCount or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<CreateBookResponse>)> {
    let book_id = state.services.books.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookResponse {
            status: SUCCESS.to_string(),
            message: "Book added successfully".to_string(),
            data: BookIdData { book_id },
        }),
    ))
}

/// List books, optionally filtered.
///
/// Reads raw pairs so that no query string can make the listing fail.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Book summaries", body = ListBooksResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ListBooksResponse> {
    let query = BookQuery::from_pairs(pairs);
    let books = state.services.books.list(&query).await;

    Json(ListBooksResponse {
        status: SUCCESS.to_string(),
        data: BooksData { books },
    })
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = GetBookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AppPath(book_id): AppPath<String>,
) -> AppResult<Json<GetBookResponse>> {
    let book = state.services.books.get(&book_id).await?;

    Ok(Json(GetBookResponse {
        status: SUCCESS.to_string(),
        data: BookData { book },
    }))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name, readPage above pageCount or malformed body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AppPath(book_id): AppPath<String>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&book_id, payload).await?;
    Ok(Json(MessageResponse::success("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AppPath(book_id): AppPath<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&book_id).await?;
    Ok(Json(MessageResponse::success("Book deleted successfully")))
}
