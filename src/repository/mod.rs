//! Repository layer: in-memory record storage

pub mod books;

/// Main repository struct holding every record store
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository around the given books store
    pub fn new(books: books::BooksRepository) -> Self {
        Self { books }
    }

    /// Repository pre-loaded with the built-in catalog
    pub fn seeded() -> Self {
        Self::new(books::BooksRepository::seeded())
    }
}
