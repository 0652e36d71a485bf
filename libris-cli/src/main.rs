//! Main entry point for the libris CLI.
//!
//! This is the command-line interface for the libris book catalog.
//! It provides commands for managing the catalog:
//! - `add` / `remove`: Add or remove books
//! - `search` / `list`: Find books
//! - `borrow` / `return`: Lend books to the current user
//! - `add-user` / `users` / `history`: Manage users
//! - `logs` / `config`: Inspect the log file and configuration

use clap::Parser;
use libris_cli::cli::{Cli, Command};
use libris_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        user: cli.user,
    };

    // Execute the command
    let result = match cli.command {
        Command::Add(cmd) => cmd.execute(&global),
        Command::Remove(cmd) => cmd.execute(&global),
        Command::Search(cmd) => cmd.execute(&global),
        Command::Borrow(cmd) => cmd.execute(&global),
        Command::Return(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::AddUser(cmd) => cmd.execute(&global),
        Command::Users(cmd) => cmd.execute(&global),
        Command::History(cmd) => cmd.execute(&global),
        Command::Logs(cmd) => cmd.execute(&global),
        Command::Config(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
