//! Durable reads and writes for books, users and the borrow relation.
//!
//! Every write runs in its own IMMEDIATE transaction and commits before
//! returning. Reads are associated functions over a borrowed connection,
//! so callers can run them inside or outside a transaction.

use std::collections::BTreeMap;

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::book::Book;
use crate::error::{is_constraint_violation, Error, Result};
use crate::user::User;

use super::connection::Database;

const INSERT_BOOK: &str = r"
    INSERT INTO books (title, author, category, available)
    VALUES (?1, ?2, ?3, 1)
";

const SELECT_BOOKS: &str = r"
    SELECT title, author, category, available
    FROM books
    ORDER BY id
";

const SELECT_AVAILABLE_BOOKS: &str = r"
    SELECT title, author, category, available
    FROM books
    WHERE available = 1
    ORDER BY id
";

const SELECT_BOOK_BY_TITLE: &str = r"
    SELECT title, author, category, available
    FROM books
    WHERE title = ?1
";

const DELETE_BORROWED_BY_TITLE: &str = "DELETE FROM borrowed WHERE book_title = ?1";

const DELETE_BOOK: &str = "DELETE FROM books WHERE title = ?1";

const MARK_BORROWED: &str = r"
    UPDATE books SET available = 0
    WHERE title = ?1 AND available = 1
";

const MARK_RETURNED: &str = r"
    UPDATE books SET available = 1
    WHERE title = ?1 AND available = 0
";

const INSERT_BORROWED: &str = r"
    INSERT OR IGNORE INTO borrowed (username, book_title)
    VALUES (?1, ?2)
";

const DELETE_BORROWED: &str = r"
    DELETE FROM borrowed
    WHERE username = ?1 AND book_title = ?2
";

const INSERT_USER: &str = "INSERT INTO users (username) VALUES (?1)";

const SELECT_USERNAMES: &str = "SELECT username FROM users ORDER BY username";

const SELECT_BORROWED: &str = r"
    SELECT username, book_title
    FROM borrowed
    ORDER BY rowid
";

/// Deserializes a book from columns: title, author, category, available.
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book::from_row(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
    ))
}

impl Database {
    /// Inserts a new, available book.
    ///
    /// A uniqueness violation on the title is reported as
    /// [`Error::DuplicateBook`], never as a raw database error.
    ///
    /// # Errors
    ///
    /// Returns an error if the title already exists or the insert fails.
    pub fn insert_book(&mut self, book: &Book) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        match tx.execute(
            INSERT_BOOK,
            params![book.title(), book.author(), book.category()],
        ) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                log::debug!("insert of '{}' hit the title constraint: {e}", book.title());
                return Err(Error::DuplicateBook {
                    title: book.title().to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        Ok(())
    }

    /// Deletes a book and every borrow row that references it.
    ///
    /// Borrow rows go first so the foreign key from `borrowed` to `books`
    /// is never violated. Returns the number of book rows deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or either delete fails.
    pub fn delete_book(&mut self, title: &str) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let released = tx.execute(DELETE_BORROWED_BY_TITLE, params![title])?;
        let deleted = tx.execute(DELETE_BOOK, params![title])?;
        log::debug!("deleted {deleted} book row(s) and {released} borrow row(s) for '{title}'");

        tx.commit()?;
        Ok(deleted)
    }

    /// Marks a book borrowed and records the borrow row.
    ///
    /// Returns `Ok(false)` without changing anything if the book is not
    /// currently available in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or a statement fails.
    pub fn checkout_book(&mut self, username: &str, title: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if tx.execute(MARK_BORROWED, params![title])? == 0 {
            return Ok(false);
        }
        tx.execute(INSERT_BORROWED, params![username, title])?;

        tx.commit()?;
        Ok(true)
    }

    /// Removes the borrow row and marks the book available again.
    ///
    /// Returns `Ok(false)` without changing anything if `username` holds
    /// no borrow row for the title in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or a statement fails.
    pub fn checkin_book(&mut self, username: &str, title: &str) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if tx.execute(DELETE_BORROWED, params![username, title])? == 0 {
            return Ok(false);
        }
        tx.execute(MARK_RETURNED, params![title])?;

        tx.commit()?;
        Ok(true)
    }

    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateUser`] if the name is taken, or the
    /// underlying error if the insert fails for another reason.
    pub fn insert_user(&mut self, username: &str) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        match tx.execute(INSERT_USER, params![username]) {
            Ok(_) => {}
            Err(e) if is_constraint_violation(&e) => {
                return Err(Error::DuplicateUser {
                    username: username.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        Ok(())
    }

    /// Lists every book in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_books(conn: &Connection) -> Result<Vec<Book>> {
        let mut stmt = conn.prepare(SELECT_BOOKS)?;
        let books = stmt
            .query_map([], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    /// Lists available books in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_available_books(conn: &Connection) -> Result<Vec<Book>> {
        let mut stmt = conn.prepare(SELECT_AVAILABLE_BOOKS)?;
        let books = stmt
            .query_map([], row_to_book)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    /// Looks up one book by title using the column's `NOCASE` collation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_book(conn: &Connection, title: &str) -> Result<Option<Book>> {
        let book = conn
            .query_row(SELECT_BOOK_BY_TITLE, params![title], row_to_book)
            .optional()?;
        Ok(book)
    }

    /// Loads every user with their borrowed titles, ordered by username.
    ///
    /// Each user's titles are in the order the borrow rows were written.
    ///
    /// # Errors
    ///
    /// Returns an error if either query fails.
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut borrowed: BTreeMap<String, Vec<String>> = BTreeMap::new();
        {
            let mut stmt = conn.prepare(SELECT_USERNAMES)?;
            let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
            for name in names {
                borrowed.insert(name?, Vec::new());
            }
        }
        {
            let mut stmt = conn.prepare(SELECT_BORROWED)?;
            let rows = stmt.query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            for row in rows {
                let (username, title) = row?;
                borrowed.entry(username).or_default().push(title);
            }
        }

        Ok(borrowed
            .into_iter()
            .map(|(username, titles)| User::with_borrowed(username, titles))
            .collect())
    }
}
