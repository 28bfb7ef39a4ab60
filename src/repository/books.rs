//! In-memory book store.
//!
//! Records live in a single insertion-ordered `Vec` behind one `RwLock`, so every
//! mutation is atomic with respect to concurrent reads and writes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::book::{generate_book_id, Book, BookPayload};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its id.
    ///
    /// The id is re-rolled while it collides with a live record.
    pub async fn append(&self, mut book: Book) -> String {
        let mut books = self.books.write().await;
        while books.iter().any(|b| b.id == book.id) {
            book.id = generate_book_id();
        }
        let id = book.id.clone();
        books.push(book);
        id
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Replace the payload fields of an existing record. Returns `false` if `id` is unknown.
    pub async fn replace(&self, id: &str, payload: BookPayload, now: DateTime<Utc>) -> bool {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.id == id) {
            Some(book) => {
                book.apply_update(payload, now);
                true
            }
            None => false,
        }
    }

    /// Remove a record. Returns `false` if `id` is unknown.
    pub async fn remove(&self, id: &str) -> bool {
        let mut books = self.books.write().await;
        match books.iter().position(|b| b.id == id) {
            Some(index) => {
                books.remove(index);
                true
            }
            None => false,
        }
    }

    /// Copy of all records in insertion order
    pub async fn snapshot(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }
}
