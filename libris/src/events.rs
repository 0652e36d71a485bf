//! Structured catalog events and the sinks that receive them.
//!
//! The catalog reports the outcome of every operation to an [`EventSink`]
//! supplied at construction time. Sinks decide formatting and destination;
//! the catalog never writes log output itself.

use std::fmt;

use crate::error::Error;

/// The catalog operation an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Opening the store and loading the projection.
    Open,
    /// Adding a book.
    AddBook,
    /// Removing a book.
    RemoveBook,
    /// Substring search over titles, authors and categories.
    SearchBooks,
    /// Exact category filter.
    FilterByCategory,
    /// Borrowing a book.
    BorrowBook,
    /// Returning a book.
    ReturnBook,
    /// Listing available books from storage.
    AvailableBooks,
    /// Registering a user.
    AddUser,
    /// Reading a user's borrowing list.
    UserHistory,
    /// Rebuilding the projection from storage.
    Reload,
    /// Closing the store.
    Close,
}

impl Operation {
    /// The snake-case name used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::AddBook => "add_book",
            Self::RemoveBook => "remove_book",
            Self::SearchBooks => "search_books",
            Self::FilterByCategory => "filter_by_category",
            Self::BorrowBook => "borrow_book",
            Self::ReturnBook => "return_book",
            Self::AvailableBooks => "available_books",
            Self::AddUser => "add_user",
            Self::UserHistory => "user_history",
            Self::Reload => "reload",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The operation completed (for reads: at least one match, or a plain read).
    Success,
    /// Input failed validation.
    Invalid,
    /// A book or user with the same key already exists.
    Duplicate,
    /// The book or user does not exist, or a read matched nothing.
    NotFound,
    /// The book is in the wrong state for the request.
    Unavailable,
    /// The caller declined to confirm.
    Cancelled,
    /// Storage failed.
    Failed,
}

impl Outcome {
    /// The name used in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Invalid => "invalid",
            Self::Duplicate => "duplicate",
            Self::NotFound => "not_found",
            Self::Unavailable => "unavailable",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }

    /// Whether the outcome represents a successful operation.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Error> for Outcome {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation { .. } => Self::Invalid,
            Error::DuplicateBook { .. } | Error::DuplicateUser { .. } => Self::Duplicate,
            Error::BookNotFound { .. } | Error::UserNotFound { .. } => Self::NotFound,
            Error::BookUnavailable { .. } | Error::BookNotBorrowed { .. } => Self::Unavailable,
            Error::RemovalCancelled { .. } => Self::Cancelled,
            Error::Database(_)
            | Error::Configuration(_)
            | Error::Io(_)
            | Error::InvalidPath { .. } => Self::Failed,
        }
    }
}

/// One structured notification emitted by the catalog.
///
/// # Examples
///
/// ```
/// use libris::events::{CatalogEvent, Operation, Outcome};
///
/// let event = CatalogEvent::new(Operation::AddBook, "title='Dune'", Outcome::Success);
/// assert_eq!(event.to_string(), "add_book title='Dune' -> success");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEvent {
    /// The operation that ran.
    pub operation: Operation,
    /// Key parameters, formatted as `name='value'` pairs.
    pub subject: String,
    /// How the operation ended.
    pub outcome: Outcome,
}

impl CatalogEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(operation: Operation, subject: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            operation,
            subject: subject.into(),
            outcome,
        }
    }
}

impl fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.is_empty() {
            write!(f, "{} -> {}", self.operation, self.outcome)
        } else {
            write!(f, "{} {} -> {}", self.operation, self.subject, self.outcome)
        }
    }
}

/// Receiver for catalog events.
///
/// Implementations must not panic; a sink that cannot deliver an event
/// drops it.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    /// Records one event.
    fn record(&self, event: &CatalogEvent);
}

/// A sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &CatalogEvent) {}
}

/// Forwards each event to every inner sink, in order.
///
/// # Examples
///
/// ```
/// use libris::events::{MultiSink, NullSink};
/// use libris::{LogLevel, Logger};
///
/// let sink = MultiSink::new()
///     .with(NullSink)
///     .with(Logger::new(LogLevel::Quiet));
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Default)]
pub struct MultiSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl MultiSink {
    /// Creates an empty fan-out sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink.
    #[must_use]
    pub fn with(mut self, sink: impl EventSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Number of inner sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there are no inner sinks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl EventSink for MultiSink {
    fn record(&self, event: &CatalogEvent) {
        for sink in &self.sinks {
            sink.record(event);
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn record(&self, event: &CatalogEvent) {
        (**self).record(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for std::rc::Rc<S> {
    fn record(&self, event: &CatalogEvent) {
        (**self).record(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<CatalogEvent>>);

    impl EventSink for Recorder {
        fn record(&self, event: &CatalogEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn test_event_display() {
        let event = CatalogEvent::new(Operation::BorrowBook, "user='u1' title='X'", Outcome::Unavailable);
        assert_eq!(
            event.to_string(),
            "borrow_book user='u1' title='X' -> unavailable"
        );

        let event = CatalogEvent::new(Operation::Open, "", Outcome::Success);
        assert_eq!(event.to_string(), "open -> success");
    }

    #[test]
    fn test_outcome_from_error() {
        let cases = [
            (
                Error::Validation {
                    field: "title".into(),
                    message: "empty".into(),
                },
                Outcome::Invalid,
            ),
            (Error::DuplicateBook { title: "a".into() }, Outcome::Duplicate),
            (
                Error::DuplicateUser {
                    username: "a".into(),
                },
                Outcome::Duplicate,
            ),
            (Error::BookNotFound { title: "a".into() }, Outcome::NotFound),
            (
                Error::UserNotFound {
                    username: "a".into(),
                },
                Outcome::NotFound,
            ),
            (Error::BookUnavailable { title: "a".into() }, Outcome::Unavailable),
            (Error::BookNotBorrowed { title: "a".into() }, Outcome::Unavailable),
            (Error::RemovalCancelled { title: "a".into() }, Outcome::Cancelled),
            (
                Error::Database(rusqlite::Error::QueryReturnedNoRows),
                Outcome::Failed,
            ),
        ];

        for (err, expected) in &cases {
            assert_eq!(Outcome::from(err), *expected, "{err}");
        }
    }

    #[test]
    fn test_multi_sink_fans_out() {
        let first = Rc::new(Recorder::default());
        let second = Rc::new(Recorder::default());
        let sink = MultiSink::new()
            .with(Rc::clone(&first))
            .with(Rc::clone(&second));

        sink.record(&CatalogEvent::new(Operation::AddUser, "user='a'", Outcome::Success));

        assert_eq!(first.0.borrow().len(), 1);
        assert_eq!(second.0.borrow().len(), 1);
        assert_eq!(first.0.borrow()[0].operation, Operation::AddUser);
    }

    #[test]
    fn test_mock_sink_receives_event() {
        let mut mock = MockEventSink::new();
        mock.expect_record()
            .withf(|e| e.operation == Operation::Close && e.outcome.is_success())
            .times(1)
            .return_const(());

        mock.record(&CatalogEvent::new(Operation::Close, "", Outcome::Success));
    }
}
