//! Repository layer for record storage

pub mod books;

/// Main repository struct holding the record stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
