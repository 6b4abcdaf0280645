//! Books repository: the in-memory record store.
//!
//! Records live in an insertion-ordered map keyed by id, guarded by a single
//! lock. Every operation takes the lock once, so each call is atomic with
//! respect to the record it touches and readers never observe a partial update.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::book::{default_catalog, Book},
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<String, Book>>>,
}

impl BooksRepository {
    /// Empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the three built-in records
    pub fn seeded() -> Self {
        let books = default_catalog()
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, IndexMap<String, Book>>> {
        self.books
            .read()
            .map_err(|_| AppError::Internal("books lock poisoned (read)".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, IndexMap<String, Book>>> {
        self.books
            .write()
            .map_err(|_| AppError::Internal("books lock poisoned (write)".to_string()))
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// All records in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.values().cloned().collect())
    }

    /// Get a copy of the record with the given id
    pub fn find_by_id(&self, id: &str) -> AppResult<Book> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    pub fn len(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.read()?.is_empty())
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a record. Ids are unique: an existing id is rejected.
    pub fn insert(&self, book: Book) -> AppResult<Book> {
        let mut books = self.write()?;
        if books.contains_key(&book.id) {
            return Err(AppError::Conflict(crate::error::BOOK_ALREADY_EXISTS.to_string()));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book)
    }

    /// Run `f` against the stored record under the write lock and return the
    /// updated copy. The record is left untouched when `f` fails.
    pub fn apply<F>(&self, id: &str, f: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut books = self.write()?;
        let book = books.get_mut(id).ok_or_else(AppError::book_not_found)?;
        let mut updated = book.clone();
        f(&mut updated)?;
        *book = updated.clone();
        Ok(updated)
    }

    /// Take one copy out. Fails with `Unavailable` when none are left.
    pub fn checkout(&self, id: &str) -> AppResult<Book> {
        self.apply(id, |book| {
            book.quantity = book
                .quantity
                .checked_sub(1)
                .ok_or_else(AppError::book_not_available)?;
            Ok(())
        })
    }

    /// Put one copy back
    pub fn return_book(&self, id: &str) -> AppResult<Book> {
        self.apply(id, |book| {
            book.quantity = book
                .quantity
                .checked_add(1)
                .ok_or_else(|| AppError::Conflict("Book quantity overflow!".to_string()))?;
            Ok(())
        })
    }

    /// Delete the record, preserving the order of the remaining ones
    pub fn remove(&self, id: &str) -> AppResult<Book> {
        self.write()?
            .shift_remove(id)
            .ok_or_else(AppError::book_not_found)
    }
}
