//! The catalog store: durable database plus in-memory projection.
//!
//! [`Catalog`] owns both halves and keeps them in lockstep. Every mutating
//! operation commits to the database first and only then touches the
//! projection, so a failed write never leaves the projection ahead of
//! storage. If the process fails between the two steps the projection is
//! behind, and [`Catalog::reload`] rebuilds it.
//!
//! Each public operation reports exactly one [`CatalogEvent`] to the
//! injected [`EventSink`].

mod projection;

#[cfg(test)]
mod proptests;

use std::fmt;

use crate::book::Book;
use crate::database::{Database, DatabaseConfig, StoreLocation};
use crate::error::{Error, Result};
use crate::events::{CatalogEvent, EventSink, Operation, Outcome};
use crate::user::User;

use projection::Projection;

/// Confirmation of a successful borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowReceipt {
    /// The title in its stored casing.
    pub title: String,
    /// The book's author.
    pub author: String,
}

impl fmt::Display for BorrowReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully borrowed '{}' by {}.", self.title, self.author)
    }
}

/// Confirmation of a successful return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// The title in its stored casing.
    pub title: String,
}

impl fmt::Display for ReturnReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Successfully returned '{}'.", self.title)
    }
}

/// A book catalog backed by `SQLite`.
///
/// # Examples
///
/// ```
/// use libris::events::NullSink;
/// use libris::Catalog;
///
/// let mut catalog = Catalog::in_memory(NullSink).unwrap();
/// catalog.add_user("alice").unwrap();
/// catalog.add_book("Dune", "Frank Herbert", Some("Sci-Fi")).unwrap();
///
/// let receipt = catalog.borrow_book("alice", "dune").unwrap();
/// assert_eq!(receipt.to_string(), "Successfully borrowed 'Dune' by Frank Herbert.");
/// assert_eq!(catalog.user_history("alice").unwrap(), ["Dune"]);
/// ```
pub struct Catalog {
    db: Database,
    projection: Projection,
    sink: Box<dyn EventSink>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("location", self.db.location())
            .field("books", &self.projection.books().len())
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Opens (or creates) the store and loads the projection from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, the schema
    /// cannot be created, or the initial load fails.
    pub fn open(config: DatabaseConfig, sink: impl EventSink + 'static) -> Result<Self> {
        let sink: Box<dyn EventSink> = Box::new(sink);
        let subject = format!("location='{}'", config.location);

        let opened = Database::open(config)
            .and_then(|db| Projection::load(db.connection()).map(|projection| (db, projection)));

        match opened {
            Ok((db, projection)) => {
                log::debug!(
                    "loaded {} book(s) and {} user(s)",
                    projection.books().len(),
                    projection.users().count()
                );
                sink.record(&CatalogEvent::new(Operation::Open, subject, Outcome::Success));
                Ok(Self {
                    db,
                    projection,
                    sink,
                })
            }
            Err(e) => {
                sink.record(&CatalogEvent::new(Operation::Open, subject, Outcome::from(&e)));
                Err(e)
            }
        }
    }

    /// Opens a private store that disappears when the catalog is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn in_memory(sink: impl EventSink + 'static) -> Result<Self> {
        Self::open(DatabaseConfig::in_memory(), sink)
    }

    /// Where the durable store lives.
    #[must_use]
    pub const fn location(&self) -> &StoreLocation {
        self.db.location()
    }

    /// All books in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        self.projection.books()
    }

    /// Looks up a book by title, ignoring case.
    #[must_use]
    pub fn book(&self, title: &str) -> Option<&Book> {
        self.projection.book(title)
    }

    /// All users ordered by username.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.projection.users()
    }

    /// Looks up a user by exact name.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.projection.user(username)
    }

    /// Adds a new, available book.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if a field is blank or too long
    /// - [`Error::DuplicateBook`] if the title exists in any casing
    /// - [`Error::Database`] if the insert fails
    pub fn add_book(&mut self, title: &str, author: &str, category: Option<&str>) -> Result<()> {
        let result = self.try_add_book(title, author, category);
        self.finish(Operation::AddBook, format!("title='{title}'"), result)
    }

    fn try_add_book(&mut self, title: &str, author: &str, category: Option<&str>) -> Result<()> {
        let book = Book::new(title, author, category)?;
        if self.projection.book(title).is_some() {
            return Err(Error::DuplicateBook {
                title: title.to_string(),
            });
        }
        self.db.insert_book(&book)?;
        self.projection.push_book(book);
        Ok(())
    }

    /// Removes a book and its borrow rows.
    ///
    /// Users' in-memory borrowing lists keep the title until the next
    /// [`reload`](Self::reload).
    ///
    /// # Errors
    ///
    /// - [`Error::BookNotFound`] if no book has this title, including one
    ///   already deleted from storage by another handle
    /// - [`Error::RemovalCancelled`] if `confirmed` is false
    /// - [`Error::Database`] if the delete fails
    pub fn remove_book(&mut self, title: &str, confirmed: bool) -> Result<Book> {
        let result = self.try_remove_book(title, confirmed);
        self.finish(Operation::RemoveBook, format!("title='{title}'"), result)
    }

    fn try_remove_book(&mut self, title: &str, confirmed: bool) -> Result<Book> {
        let resolved = self.resolve_title(title)?;
        if !confirmed {
            return Err(Error::RemovalCancelled { title: resolved });
        }

        let deleted = self.db.delete_book(&resolved)?;
        let removed = self.projection.remove_book(&resolved);
        match removed {
            Some(book) if deleted > 0 => Ok(book),
            _ => {
                log::debug!("'{resolved}' was already gone from storage");
                Err(Error::BookNotFound { title: resolved })
            }
        }
    }

    /// Finds books whose title contains `title`, narrowed by optional
    /// author and category substrings. Matching ignores case.
    #[must_use]
    pub fn search_books(
        &self,
        title: &str,
        author: Option<&str>,
        category: Option<&str>,
    ) -> Vec<Book> {
        let found = self.projection.search(title, author, category);
        self.record(Operation::SearchBooks, format!("title='{title}'"), match_outcome(&found));
        found
    }

    /// Books whose category equals `category`, ignoring case.
    #[must_use]
    pub fn filter_by_category(&self, category: &str) -> Vec<Book> {
        let found = self.projection.in_category(category);
        self.record(
            Operation::FilterByCategory,
            format!("category='{category}'"),
            match_outcome(&found),
        );
        found
    }

    /// Lends a book to a user.
    ///
    /// # Errors
    ///
    /// - [`Error::UserNotFound`] if the user is unknown
    /// - [`Error::BookNotFound`] if no book has this title
    /// - [`Error::BookUnavailable`] if the book is already out
    /// - [`Error::Database`] if the update fails
    pub fn borrow_book(&mut self, username: &str, title: &str) -> Result<BorrowReceipt> {
        let result = self.try_borrow_book(username, title);
        self.finish(
            Operation::BorrowBook,
            format!("user='{username}' title='{title}'"),
            result,
        )
    }

    fn try_borrow_book(&mut self, username: &str, title: &str) -> Result<BorrowReceipt> {
        self.require_user(username)?;
        let book = self.projection.book(title).ok_or_else(|| Error::BookNotFound {
            title: title.to_string(),
        })?;
        if !book.is_available() {
            return Err(Error::BookUnavailable {
                title: book.title().to_string(),
            });
        }
        let receipt = BorrowReceipt {
            title: book.title().to_string(),
            author: book.author().to_string(),
        };

        if !self.db.checkout_book(username, &receipt.title)? {
            log::debug!("'{}' is out in storage but not in memory", receipt.title);
            return Err(Error::BookUnavailable {
                title: receipt.title,
            });
        }

        self.projection.set_available(&receipt.title, false);
        if let Some(user) = self.projection.user_mut(username) {
            user.borrow(receipt.title.clone());
        }
        Ok(receipt)
    }

    /// Takes a book back from the user who borrowed it.
    ///
    /// # Errors
    ///
    /// - [`Error::UserNotFound`] if the user is unknown
    /// - [`Error::BookNotFound`] if no book has this title
    /// - [`Error::BookNotBorrowed`] if the book is on the shelf or held by
    ///   someone else
    /// - [`Error::Database`] if the update fails
    pub fn return_book(&mut self, username: &str, title: &str) -> Result<ReturnReceipt> {
        let result = self.try_return_book(username, title);
        self.finish(
            Operation::ReturnBook,
            format!("user='{username}' title='{title}'"),
            result,
        )
    }

    fn try_return_book(&mut self, username: &str, title: &str) -> Result<ReturnReceipt> {
        let user = self.require_user(username)?;
        let book = self.projection.book(title).ok_or_else(|| Error::BookNotFound {
            title: title.to_string(),
        })?;
        let resolved = book.title().to_string();
        if book.is_available() || !user.holds(&resolved) {
            return Err(Error::BookNotBorrowed { title: resolved });
        }

        if !self.db.checkin_book(username, &resolved)? {
            log::debug!("no borrow row for '{resolved}' held by '{username}'");
            return Err(Error::BookNotBorrowed { title: resolved });
        }

        self.projection.set_available(&resolved, true);
        if let Some(user) = self.projection.user_mut(username) {
            user.give_back(&resolved);
        }
        Ok(ReturnReceipt { title: resolved })
    }

    /// Books currently on the shelf, read fresh from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn available_books(&self) -> Result<Vec<Book>> {
        let result = Database::list_available_books(self.db.connection());
        self.finish(Operation::AvailableBooks, String::new(), result)
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] if the name is empty
    /// - [`Error::DuplicateUser`] if the name is taken
    /// - [`Error::Database`] if the insert fails
    pub fn add_user(&mut self, username: &str) -> Result<()> {
        let result = self.try_add_user(username);
        self.finish(Operation::AddUser, format!("user='{username}'"), result)
    }

    fn try_add_user(&mut self, username: &str) -> Result<()> {
        let user = User::new(username)?;
        if self.projection.user(username).is_some() {
            return Err(Error::DuplicateUser {
                username: username.to_string(),
            });
        }
        self.db.insert_user(username)?;
        self.projection.insert_user(user);
        Ok(())
    }

    /// Titles the user currently holds, or `None` for an unknown user.
    #[must_use]
    pub fn user_history(&self, username: &str) -> Option<&[String]> {
        let history = self.projection.user(username).map(User::borrowed_books);
        let outcome = if history.is_some() {
            Outcome::Success
        } else {
            Outcome::NotFound
        };
        self.record(Operation::UserHistory, format!("user='{username}'"), outcome);
        history
    }

    /// Discards the projection and rebuilds it from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the load fails; the old projection is kept.
    pub fn reload(&mut self) -> Result<()> {
        let result = Projection::load(self.db.connection()).map(|projection| {
            self.projection = projection;
        });
        self.finish(Operation::Reload, String::new(), result)
    }

    /// Closes the store. Failures are reported as events, never returned.
    pub fn close(self) {
        let Self { db, sink, .. } = self;
        let outcome = match db.close() {
            Ok(()) => Outcome::Success,
            Err(e) => {
                log::warn!("failed to close catalog database: {e}");
                Outcome::from(&e)
            }
        };
        sink.record(&CatalogEvent::new(Operation::Close, "", outcome));
    }

    fn resolve_title(&self, title: &str) -> Result<String> {
        self.projection
            .book(title)
            .map(|b| b.title().to_string())
            .ok_or_else(|| Error::BookNotFound {
                title: title.to_string(),
            })
    }

    fn require_user(&self, username: &str) -> Result<&User> {
        self.projection
            .user(username)
            .ok_or_else(|| Error::UserNotFound {
                username: username.to_string(),
            })
    }

    fn record(&self, operation: Operation, subject: String, outcome: Outcome) {
        self.sink
            .record(&CatalogEvent::new(operation, subject, outcome));
    }

    fn finish<T>(&self, operation: Operation, subject: String, result: Result<T>) -> Result<T> {
        let outcome = match &result {
            Ok(_) => Outcome::Success,
            Err(e) => Outcome::from(e),
        };
        self.record(operation, subject, outcome);
        result
    }
}

/// `NotFound` when a read matched nothing.
fn match_outcome(found: &[Book]) -> Outcome {
    if found.is_empty() {
        Outcome::NotFound
    } else {
        Outcome::Success
    }
}
