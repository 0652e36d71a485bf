#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # libris
//!
//! A library for managing a small book catalog.
//!
//! Books and users live in a `SQLite` database. A [`Catalog`] keeps an
//! in-memory projection of that database in step with every change, so
//! reads never touch storage while writes are always durable first.
//!
//! ## Core Types
//!
//! - [`Catalog`]: the store, with add/remove/search/borrow/return operations
//! - [`Book`] and [`User`]: the catalog's records
//! - [`Error`] and [`Result`]: Error handling types
//! - [`events`]: the structured events each operation reports
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use libris::events::NullSink;
//! use libris::Catalog;
//!
//! let mut catalog = Catalog::in_memory(NullSink).unwrap();
//! catalog.add_book("Python Basics", "Alice Author", Some("Programming")).unwrap();
//!
//! let found = catalog.search_books("python", None, None);
//! assert_eq!(found.len(), 1);
//! assert!(found[0].is_available());
//! ```

pub mod book;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod events;
pub mod logging;
pub mod user;

// Re-export key types at crate root for convenience
pub use book::{Book, ValidationError};
pub use catalog::{BorrowReceipt, Catalog, ReturnReceipt};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, StoreLocation};
pub use error::{Error, Result};
pub use events::{CatalogEvent, EventSink, Operation, Outcome};
pub use logging::{init_logger, FileLogger, LogLevel, Logger};
pub use user::User;
