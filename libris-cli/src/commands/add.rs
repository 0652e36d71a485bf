//! Add command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Add a book to the catalog.
#[derive(Args)]
pub struct AddCommand {
    /// Book title (unique, ignoring case)
    pub title: String,

    /// Author name
    pub author: String,

    /// Optional category
    pub category: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut catalog = open_catalog(global, &config)?;

        catalog.add_book(&self.title, &self.author, self.category.as_deref())?;

        match self.category {
            Some(category) => println!("Added '{}' by {} in {category}.", self.title, self.author),
            None => println!("Added '{}' by {}.", self.title, self.author),
        }
        Ok(())
    }
}
