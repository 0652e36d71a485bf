//! Search command implementation.

use crate::commands::list::{print_books, OutputFormat};
use crate::error::CliError;
use crate::utils::{load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Search books by title, optionally narrowed by author and category.
#[derive(Args)]
pub struct SearchCommand {
    /// Part of the title (case-insensitive)
    pub title: String,

    /// Part of the author's name
    #[arg(long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// Part of the category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = open_catalog(global, &config)?;

        let books = catalog.search_books(
            &self.title,
            self.author.as_deref(),
            self.category.as_deref(),
        );

        print_books(&books, self.format, "No books found.")
    }
}
