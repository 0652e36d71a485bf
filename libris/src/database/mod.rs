//! Database layer for persistent storage of the catalog.
//!
//! This module provides the SQLite-backed durable store: location
//! resolution, connection setup, schema creation and the row-level reads
//! and writes the catalog is built on. Application code should go through
//! [`crate::Catalog`], which keeps the in-memory projection in step with
//! these writes.
//!
//! # Examples
//!
//! ```
//! use libris::database::{Database, DatabaseConfig};
//! use libris::Book;
//!
//! let mut db = Database::open(DatabaseConfig::in_memory()).unwrap();
//! let book = Book::new("Dune", "Frank Herbert", Some("Sci-Fi")).unwrap();
//! db.insert_book(&book).unwrap();
//!
//! let all = Database::list_books(db.connection()).unwrap();
//! assert_eq!(all.len(), 1);
//! ```

mod config;
mod connection;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, StoreLocation,
    DATA_DIR_NAME, DEFAULT_DATABASE_FILE, IN_MEMORY_MARKER,
};
pub use connection::Database;
pub use schema::initialize_schema;
