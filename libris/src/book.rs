//! Book records and input validation.
//!
//! A [`Book`] is identified by its title compared without regard to case.
//! Titles are stored exactly as supplied; the lower-cased form is only used
//! for lookups.

use serde::{Deserialize, Serialize};

/// Maximum length of a title or author, counted in characters.
pub const MAX_FIELD_LEN: usize = 200;

/// Validation error for book construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// A single-copy book in the catalog.
///
/// # Examples
///
/// ```
/// use libris::Book;
///
/// let book = Book::new("Python Basics", "Alice Author", Some("编程")).unwrap();
/// assert_eq!(book.title(), "Python Basics");
/// assert_eq!(book.category(), Some("编程"));
/// assert!(book.is_available());
///
/// assert!(Book::new("   ", "Alice Author", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    category: Option<String>,
    available: bool,
}

impl Book {
    /// Creates a new, available book after validating its fields.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title or author is empty or whitespace-only
    /// - The category is provided but is empty or whitespace-only
    /// - The title or author is longer than [`MAX_FIELD_LEN`] characters
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let author = author.into();
        let category = category.map(str::to_string);

        validate_required("title", &title)?;
        validate_required("author", &author)?;
        if let Some(ref category) = category {
            if category.trim().is_empty() {
                return Err(ValidationError::new(
                    "category",
                    "category must be non-empty after trimming whitespace when given",
                ));
            }
        }
        validate_length("title", &title)?;
        validate_length("author", &author)?;

        Ok(Self {
            title,
            author,
            category,
            available: true,
        })
    }

    /// Rebuilds a book from stored columns without re-validating it.
    pub(crate) fn from_row(
        title: String,
        author: String,
        category: Option<String>,
        available: bool,
    ) -> Self {
        Self {
            title,
            author,
            category,
            available,
        }
    }

    /// The title in its stored casing.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The category, if one was given.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether the single copy is on the shelf.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// The identity key: the lower-cased title.
    #[must_use]
    pub fn key(&self) -> String {
        title_key(&self.title)
    }

    /// Returns true if `title` names this book, ignoring case.
    #[must_use]
    pub fn has_title(&self, title: &str) -> bool {
        self.key() == title_key(title)
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' by {}", self.title, self.author)?;
        if let Some(ref category) = self.category {
            write!(f, " in {category}")?;
        }
        Ok(())
    }
}

/// Normalizes a title into its identity key.
#[must_use]
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Case-insensitive substring test used by searches.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{field} must be non-empty after trimming whitespace"),
        ));
    }
    Ok(())
}

fn validate_length(field: &str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(ValidationError::new(
            field,
            format!("{field} is {len} characters long; the maximum is {MAX_FIELD_LEN}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod proptests;
