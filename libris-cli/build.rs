//! Build script for libris-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("libris")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a small book catalog")
        .long_about("Command-line tool for adding, searching, borrowing and returning books")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("LIBRIS_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("LIBRIS_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("user")
                .long("user")
                .help("Act as this user instead of the configured default user")
                .value_name("NAME")
                .global(true)
                .env("LIBRIS_USER"),
        )
        .subcommands(vec![
            Command::new("add")
                .about("Add a book to the catalog")
                .long_about("Add a book with a title, an author and an optional category"),
            Command::new("remove")
                .about("Remove a book from the catalog")
                .long_about("Remove a book and release any borrow on it, after confirmation"),
            Command::new("search")
                .about("Search books by title")
                .long_about("Search books by title substring, optionally narrowed by author and category"),
            Command::new("borrow")
                .about("Borrow a book")
                .long_about("Borrow an available book as the current user"),
            Command::new("return")
                .about("Return a borrowed book")
                .long_about("Return a book the current user has borrowed"),
            Command::new("list")
                .about("List available books or a category")
                .long_about("List books on the shelf, or every book in a category"),
            Command::new("add-user")
                .about("Register a user")
                .long_about("Register a new user who can borrow books"),
            Command::new("users")
                .about("List registered users")
                .long_about("Display every registered user"),
            Command::new("history")
                .about("Show the current user's borrowed books")
                .long_about("Display the titles the current user has borrowed and not returned"),
            Command::new("logs")
                .about("Show recent log entries")
                .long_about("Display the last lines of the catalog log file"),
            Command::new("config")
                .about("Show the effective configuration")
                .long_about("Print the merged configuration as YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("libris.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
