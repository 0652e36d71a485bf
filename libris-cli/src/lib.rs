//! Library exports for libris-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! tooling that generates documentation from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
