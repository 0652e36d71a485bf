//! In-memory mirror of the durable store.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::book::{contains_ignore_case, title_key, Book};
use crate::database::Database;
use crate::error::Result;
use crate::user::User;

/// Books in insertion order and users keyed by name.
#[derive(Debug, Default, Clone)]
pub(super) struct Projection {
    books: Vec<Book>,
    users: BTreeMap<String, User>,
}

impl Projection {
    /// Rebuilds the projection from every book and user row.
    pub(super) fn load(conn: &Connection) -> Result<Self> {
        let books = Database::list_books(conn)?;
        let users = Database::list_users(conn)?
            .into_iter()
            .map(|user| (user.username().to_string(), user))
            .collect();
        Ok(Self { books, users })
    }

    pub(super) fn books(&self) -> &[Book] {
        &self.books
    }

    pub(super) fn book(&self, title: &str) -> Option<&Book> {
        let key = title_key(title);
        self.books.iter().find(|b| b.key() == key)
    }

    pub(super) fn push_book(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Drops the book with the given resolved title.
    pub(super) fn remove_book(&mut self, title: &str) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.has_title(title))?;
        Some(self.books.remove(pos))
    }

    pub(super) fn set_available(&mut self, title: &str, available: bool) {
        if let Some(book) = self.books.iter_mut().find(|b| b.has_title(title)) {
            book.set_available(available);
        }
    }

    pub(super) fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub(super) fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub(super) fn user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub(super) fn insert_user(&mut self, user: User) {
        self.users.insert(user.username().to_string(), user);
    }

    /// Substring search; every supplied filter must match.
    pub(super) fn search(
        &self,
        title: &str,
        author: Option<&str>,
        category: Option<&str>,
    ) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| contains_ignore_case(b.title(), title))
            .filter(|b| author.map_or(true, |a| contains_ignore_case(b.author(), a)))
            .filter(|b| {
                category.map_or(true, |c| {
                    b.category().is_some_and(|bc| contains_ignore_case(bc, c))
                })
            })
            .cloned()
            .collect()
    }

    /// Exact category match, ignoring case.
    pub(super) fn in_category(&self, category: &str) -> Vec<Book> {
        let wanted = category.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.category().is_some_and(|c| c.to_lowercase() == wanted))
            .cloned()
            .collect()
    }
}
