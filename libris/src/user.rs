//! Catalog users and their borrowing lists.

use serde::{Deserialize, Serialize};

use crate::book::ValidationError;

/// A registered borrower.
///
/// `borrowed_books` holds the resolved titles the user currently has out,
/// in the order they were borrowed.
///
/// # Examples
///
/// ```
/// use libris::User;
///
/// let user = User::new("alice").unwrap();
/// assert_eq!(user.username(), "alice");
/// assert!(user.borrowed_books().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    borrowed_books: Vec<String>,
}

impl User {
    /// Creates a user with an empty borrowing list.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ValidationError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ValidationError {
                field: "username".into(),
                message: "username must be non-empty".into(),
            });
        }
        Ok(Self {
            username,
            borrowed_books: Vec::new(),
        })
    }

    pub(crate) fn with_borrowed(username: String, borrowed_books: Vec<String>) -> Self {
        Self {
            username,
            borrowed_books,
        }
    }

    /// The unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Titles currently held, oldest first.
    #[must_use]
    pub fn borrowed_books(&self) -> &[String] {
        &self.borrowed_books
    }

    /// Returns true if the user holds `title` (exact match).
    #[must_use]
    pub fn holds(&self, title: &str) -> bool {
        self.borrowed_books.iter().any(|t| t == title)
    }

    pub(crate) fn borrow(&mut self, title: String) {
        self.borrowed_books.push(title);
    }

    /// Removes the first entry equal to `title`; no-op when absent.
    pub(crate) fn give_back(&mut self, title: &str) {
        if let Some(pos) = self.borrowed_books.iter().position(|t| t == title) {
            self.borrowed_books.remove(pos);
        }
    }
}
