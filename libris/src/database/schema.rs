//! Database schema definitions and SQL constants.
//!
//! Titles compare with `NOCASE` collation so the UNIQUE constraint backs
//! up the case-insensitive duplicate check done in the catalog.

use rusqlite::Connection;

use crate::error::Result;

/// SQL statement to create the books table.
pub const CREATE_BOOKS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL UNIQUE COLLATE NOCASE,
        author TEXT NOT NULL,
        category TEXT,
        available INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY NOT NULL
    )";

/// SQL statement to create the borrow relation.
///
/// A row exists for exactly the books whose `available` flag is 0.
pub const CREATE_BORROWED_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS borrowed (
        username TEXT NOT NULL,
        book_title TEXT NOT NULL COLLATE NOCASE,
        PRIMARY KEY (username, book_title),
        FOREIGN KEY (username) REFERENCES users(username),
        FOREIGN KEY (book_title) REFERENCES books(title)
    )";

/// Speeds up the per-title lookups done on remove and return.
pub const CREATE_BORROWED_TITLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_borrowed_book_title ON borrowed(book_title)";

/// Creates all tables and indices. Safe to run on an initialized database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use libris::database::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_BOOKS_TABLE, [])?;
    conn.execute(CREATE_USERS_TABLE, [])?;
    conn.execute(CREATE_BORROWED_TABLE, [])?;
    conn.execute(CREATE_BORROWED_TITLE_INDEX, [])?;
    Ok(())
}
