//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `add`: Add a book
//! - `remove`: Remove a book after confirmation
//! - `search`: Search books by title, author and category
//! - `borrow`: Borrow a book as the current user
//! - `return`: Return a borrowed book
//! - `list`: List available books or a category
//! - `add_user`: Register a user
//! - `users`: List users
//! - `history`: Show the current user's borrowed books
//! - `logs`: Show the tail of the log file
//! - `config`: Show the effective configuration
//! - `completions`: Generate shell completions

pub mod add;
pub mod add_user;
pub mod borrow;
pub mod completions;
pub mod config;
pub mod history;
pub mod list;
pub mod logs;
pub mod remove;
pub mod return_book;
pub mod search;
pub mod users;

pub use add::AddCommand;
pub use add_user::AddUserCommand;
pub use borrow::BorrowCommand;
pub use completions::CompletionsCommand;
pub use config::ConfigCommand;
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use logs::LogsCommand;
pub use remove::RemoveCommand;
pub use return_book::ReturnCommand;
pub use search::SearchCommand;
pub use users::UsersCommand;
