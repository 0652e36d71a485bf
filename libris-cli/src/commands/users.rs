//! Users command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_catalog, GlobalOptions};
use clap::Args;
use libris::User;

/// List registered users, one per line.
#[derive(Args)]
pub struct UsersCommand {}

impl UsersCommand {
    /// Execute the users command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = open_catalog(global, &config)?;

        for name in catalog.users().map(User::username) {
            println!("{name}");
        }
        Ok(())
    }
}
