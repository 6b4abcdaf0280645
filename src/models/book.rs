//! Book model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book record tracked by the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    /// Externally assigned identifier, unique within the inventory
    #[validate(length(min = 1, message = "Book id must not be empty"))]
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies currently available for checkout
    pub quantity: u32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }
}

/// Query string carrying the target book id (`?id=...`)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book ID
    pub id: Option<String>,
}

impl BookIdQuery {
    /// Borrow the id, failing when the parameter is absent
    pub fn require_id(&self) -> crate::error::AppResult<&str> {
        self.id
            .as_deref()
            .ok_or_else(crate::error::AppError::missing_id)
    }
}

/// Records loaded at startup
pub fn default_catalog() -> Vec<Book> {
    vec![
        Book::new("1", "In Search of a Lost Time", "Marcel Proust", 2),
        Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
        Book::new("3", "War and Peace", "Leo Tolstoy", 6),
    ]
}
