//! Return command implementation.

use crate::error::CliError;
use crate::utils::{current_user, load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Return a book the current user has borrowed.
#[derive(Args)]
pub struct ReturnCommand {
    /// Title of the book (case-insensitive)
    pub title: String,
}

impl ReturnCommand {
    /// Execute the return command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut catalog = open_catalog(global, &config)?;
        let user = current_user(global, &config);

        let receipt = catalog.return_book(&user, &self.title)?;
        println!("{receipt}");
        Ok(())
    }
}
