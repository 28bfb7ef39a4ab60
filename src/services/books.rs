//! Book management service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult, BookAction},
    models::book::{generate_book_id, page_value, Book, BookPayload, BookQuery, BookShort},
    repository::Repository,
};

/// Check the name and page-count rules shared by create and update.
pub fn validate_payload(payload: &BookPayload, action: BookAction) -> AppResult<()> {
    if payload.name.as_deref().map_or(true, str::is_empty) {
        return Err(AppError::MissingName(action));
    }

    let read_page = page_value(payload.read_page.as_ref());
    let page_count = page_value(payload.page_count.as_ref());
    if let (Some(read_page), Some(page_count)) = (read_page, page_count) {
        if read_page > page_count {
            return Err(AppError::PageOverflow(action));
        }
    }

    Ok(())
}

/// Apply the listing query to a snapshot, keeping insertion order.
pub fn filter_books(books: Vec<Book>, query: &BookQuery) -> Vec<Book> {
    books.into_iter().filter(|book| query.matches(book)).collect()
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book and return its generated id
    pub async fn create(&self, payload: BookPayload) -> AppResult<String> {
        validate_payload(&payload, BookAction::Create)?;

        let book = Book::new(generate_book_id(), payload, Utc::now());
        let id = self.repository.books.append(book).await;
        tracing::info!(book_id = %id, "Book created");
        Ok(id)
    }

    /// List book summaries matching the query
    pub async fn list(&self, query: &BookQuery) -> Vec<BookShort> {
        let snapshot = self.repository.books.snapshot().await;
        filter_books(snapshot, query).iter().map(BookShort::from).collect()
    }

    /// Get the full record for a book
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        self.repository
            .books
            .find_by_id(id)
            .await
            .ok_or(AppError::NotFound(BookAction::Get))
    }

    /// Replace a book's fields; validation runs before the existence check.
    pub async fn update(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        validate_payload(&payload, BookAction::Update)?;

        if !self.repository.books.replace(id, payload, Utc::now()).await {
            return Err(AppError::NotFound(BookAction::Update));
        }
        tracing::info!(book_id = %id, "Book updated");
        Ok(())
    }

    /// Delete a book
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.repository.books.remove(id).await {
            return Err(AppError::NotFound(BookAction::Delete));
        }
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}
