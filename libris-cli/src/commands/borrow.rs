//! Borrow command implementation.

use crate::error::CliError;
use crate::utils::{current_user, load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Borrow a book as the current user.
#[derive(Args)]
pub struct BorrowCommand {
    /// Title of the book (case-insensitive)
    pub title: String,
}

impl BorrowCommand {
    /// Execute the borrow command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut catalog = open_catalog(global, &config)?;
        let user = current_user(global, &config);

        let receipt = catalog.borrow_book(&user, &self.title)?;
        println!("{receipt}");
        Ok(())
    }
}
