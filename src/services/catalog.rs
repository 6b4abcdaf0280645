//! Catalog service: book listing, creation, checkout and return

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in insertion order
    pub fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list()
    }

    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.find_by_id(id)
    }

    /// Add a new book after checking its fields
    pub fn create_book(&self, book: Book) -> AppResult<Book> {
        book.validate()?;
        let book = self.repository.books.insert(book)?;
        tracing::info!(id = %book.id, quantity = book.quantity, "Book created");
        Ok(book)
    }

    pub fn checkout_book(&self, id: &str) -> AppResult<Book> {
        match self.repository.books.checkout(id) {
            Ok(book) => {
                tracing::info!(id = %book.id, quantity = book.quantity, "Book checked out");
                Ok(book)
            }
            Err(e @ AppError::Unavailable(_)) => {
                tracing::warn!(id = %id, "Checkout rejected: no copies left");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.return_book(id)?;
        tracing::info!(id = %book.id, quantity = book.quantity, "Book returned");
        Ok(book)
    }

    pub fn remove_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.remove(id)?;
        tracing::info!(id = %book.id, "Book removed");
        Ok(book)
    }

    /// Number of records currently held
    pub fn count(&self) -> AppResult<usize> {
        self.repository.books.len()
    }
}
