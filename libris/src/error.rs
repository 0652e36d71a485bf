//! Error types for the libris library.
//!
//! Every catalog operation reports failure through [`Error`]. Validation,
//! conflict, and not-found conditions are ordinary values returned to the
//! caller; only failures to open the store are fatal to construction.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a libris error.
///
/// # Examples
///
/// ```
/// use libris::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the libris library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Input was rejected before touching storage.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A book with the same title (ignoring case) already exists.
    #[error("book '{title}' already exists")]
    DuplicateBook {
        /// The title that was rejected.
        title: String,
    },

    /// A user with the same name already exists.
    #[error("user '{username}' already exists")]
    DuplicateUser {
        /// The username that was rejected.
        username: String,
    },

    /// No book matches the given title.
    #[error("book '{title}' not found")]
    BookNotFound {
        /// The title as supplied by the caller.
        title: String,
    },

    /// No user matches the given name.
    #[error("user '{username}' not found")]
    UserNotFound {
        /// The username as supplied by the caller.
        username: String,
    },

    /// The book exists but is currently borrowed.
    #[error("book '{title}' is not available (already borrowed)")]
    BookUnavailable {
        /// The resolved title of the book.
        title: String,
    },

    /// The book exists but is not borrowed by the returning user.
    #[error("book '{title}' is not borrowed")]
    BookNotBorrowed {
        /// The resolved title of the book.
        title: String,
    },

    /// The caller declined to confirm a removal.
    #[error("removal of '{title}' was cancelled")]
    RemovalCancelled {
        /// The resolved title of the book.
        title: String,
    },
}

impl From<crate::book::ValidationError> for Error {
    fn from(err: crate::book::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is an input validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::Error;
    ///
    /// let err = Error::Validation { field: "title".into(), message: "empty".into() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if the error reports a duplicate book or user.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::Error;
    ///
    /// let err = Error::DuplicateBook { title: "Dune".into() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateBook { .. } | Self::DuplicateUser { .. })
    }

    /// Check if the error reports an unknown book or user.
    ///
    /// # Examples
    ///
    /// ```
    /// use libris::Error;
    ///
    /// let err = Error::UserNotFound { username: "ghost".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound { .. } | Self::UserNotFound { .. })
    }

    /// Check if the error came from the storage layer rather than from
    /// catalog rules.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Io(_))
    }
}

/// Returns true when a `rusqlite` error is a constraint violation
/// (UNIQUE, PRIMARY KEY or FOREIGN KEY).
pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "title".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("title"));
        assert!(display.contains("must be non-empty"));
        assert!(err.is_validation());
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_duplicate_errors_are_conflicts() {
        let book = Error::DuplicateBook {
            title: "Dune".to_string(),
        };
        let user = Error::DuplicateUser {
            username: "alice".to_string(),
        };
        assert!(book.is_conflict());
        assert!(user.is_conflict());
        assert!(format!("{book}").contains("already exists"));
        assert!(format!("{user}").contains("alice"));
    }

    #[test]
    fn test_not_found_errors() {
        let book = Error::BookNotFound {
            title: "Missing".to_string(),
        };
        let user = Error::UserNotFound {
            username: "ghost".to_string(),
        };
        assert!(book.is_not_found());
        assert!(user.is_not_found());
        assert!(format!("{user}").contains("user 'ghost' not found"));
    }

    #[test]
    fn test_unavailable_error() {
        let err = Error::BookUnavailable {
            title: "Dune".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not available"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert!(err.is_storage());
    }

    #[test]
    fn test_constraint_violation_detection() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT PRIMARY KEY)")
            .unwrap();
        conn.execute("INSERT INTO t (name) VALUES ('a')", []).unwrap();
        let err = conn
            .execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap_err();
        assert!(is_constraint_violation(&err));
        assert!(!is_constraint_violation(
            &rusqlite::Error::QueryReturnedNoRows
        ));
    }
}
