//! Logs command implementation.
//!
//! Reads the log file directly; the catalog is not opened.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use clap::Args;
use libris::logging::{tail_log, TailLines};

/// Show the most recent log entries.
#[derive(Args)]
pub struct LogsCommand {
    /// Number of lines to show, or `all`
    #[arg(value_name = "N|all", default_value = "200", value_parser = TailLines::parse)]
    pub lines: TailLines,
}

impl LogsCommand {
    /// Execute the logs command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = config.log_path(&resolve_data_dir(global)?);

        match tail_log(&path, self.lines)? {
            Some(lines) => {
                for line in lines {
                    println!("{line}");
                }
            }
            None => {
                if !global.quiet {
                    eprintln!("No log file at {}", path.display());
                }
            }
        }
        Ok(())
    }
}
