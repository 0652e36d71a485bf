//! List command implementation.
//!
//! This module implements the `list` command, which displays available
//! books (or every book in a category) in various formats (table, JSON,
//! CSV, TSV). The formatters are shared with `search`.

use crate::error::CliError;
use crate::utils::{load_configuration, open_catalog, GlobalOptions};
use clap::{Args, ValueEnum};
use libris::Book;
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 4] = ["title", "author", "category", "available"];

/// List available books, or every book in a category.
#[derive(Args)]
pub struct ListCommand {
    /// Only books in this category (exact match, ignoring case)
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "LIBRIS_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for book listings.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per book (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = open_catalog(global, &config)?;

        match self.category {
            Some(ref category) => print_books(
                &catalog.filter_by_category(category),
                self.format,
                &format!("No available books in the '{category}' category."),
            ),
            None => print_books(&catalog.available_books()?, self.format, "No available books."),
        }
    }
}

/// Write books to stdout in the requested format.
///
/// `empty_message` replaces the table when there is nothing to show; the
/// machine-readable formats always print their (possibly empty) structure.
pub fn print_books(books: &[Book], format: OutputFormat, empty_message: &str) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => format_as_table(books, empty_message),
        OutputFormat::Json => format_as_json(books),
        OutputFormat::Csv => format_as_delimited(books, b','),
        OutputFormat::Tsv => format_as_delimited(books, b'\t'),
    }
}

fn status(book: &Book) -> &'static str {
    if book.is_available() {
        "Available"
    } else {
        "Borrowed"
    }
}

/// Format books as `- '<title>' by <author> (<status>)` lines.
fn format_as_table(books: &[Book], empty_message: &str) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if books.is_empty() {
        writeln!(handle, "{empty_message}")?;
        return Ok(());
    }

    for book in books {
        writeln!(
            handle,
            "- '{}' by {} ({})",
            book.title(),
            book.author(),
            status(book)
        )?;
    }

    Ok(())
}

/// Format books as JSON.
fn format_as_json(books: &[Book]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, books).map_err(|e| CliError::Output(e.to_string()))?;

    writeln!(handle)?;

    Ok(())
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::Output(e.to_string())
}

/// Format books as delimited output (CSV or TSV).
fn format_as_delimited(books: &[Book], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for book in books {
        writer
            .write_record([
                book.title(),
                book.author(),
                book.category().unwrap_or(""),
                if book.is_available() { "true" } else { "false" },
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
