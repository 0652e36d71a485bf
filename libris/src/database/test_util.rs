//! Shared test utilities for database unit tests.

use crate::book::Book;
use crate::database::{Database, DatabaseConfig};

/// Opens a fresh in-memory database with the schema in place.
///
/// # Panics
///
/// Panics if the database cannot be opened.
#[must_use]
pub fn create_test_database() -> Database {
    Database::open(DatabaseConfig::in_memory()).unwrap()
}

/// Creates an available book with a fixed author and no category.
///
/// # Panics
///
/// Panics if the title is not a valid book title.
#[must_use]
pub fn test_book(title: &str) -> Book {
    Book::new(title, "Test Author", None).unwrap()
}
