//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, AddUserCommand, BorrowCommand, CompletionsCommand, ConfigCommand,
    HistoryCommand, ListCommand, LogsCommand, RemoveCommand, ReturnCommand, SearchCommand,
    UsersCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing a small book catalog.
#[derive(Parser)]
#[command(name = "libris")]
#[command(version, about = "Manage a small book catalog", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LIBRIS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "LIBRIS_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Act as this user instead of the configured default user
    #[arg(long, value_name = "NAME", global = true, env = "LIBRIS_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a book to the catalog
    Add(AddCommand),

    /// Remove a book from the catalog
    Remove(RemoveCommand),

    /// Search books by title
    Search(SearchCommand),

    /// Borrow a book
    Borrow(BorrowCommand),

    /// Return a borrowed book
    Return(ReturnCommand),

    /// List available books or a category
    List(ListCommand),

    /// Register a user
    AddUser(AddUserCommand),

    /// List registered users
    Users(UsersCommand),

    /// Show the current user's borrowed books
    History(HistoryCommand),

    /// Show recent log entries
    Logs(LogsCommand),

    /// Show the effective configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
