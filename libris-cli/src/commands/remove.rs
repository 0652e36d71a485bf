//! Remove command implementation.
//!
//! Removal asks for confirmation on the terminal unless `--yes` is given.
//! Declining leaves the catalog unchanged and exits with status 1.

use crate::error::CliError;
use crate::utils::{confirm, load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Remove a book from the catalog.
#[derive(Args)]
pub struct RemoveCommand {
    /// Title of the book to remove (case-insensitive)
    pub title: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl RemoveCommand {
    /// Execute the remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut catalog = open_catalog(global, &config)?;

        // Only prompt for books that exist; the catalog reports missing ones
        let confirmed = self.yes
            || match catalog.book(&self.title) {
                Some(book) => confirm(&format!("Remove '{}'?", book.title()))?,
                None => false,
            };

        let removed = catalog.remove_book(&self.title, confirmed)?;
        println!("Removed '{}'.", removed.title());
        Ok(())
    }
}
