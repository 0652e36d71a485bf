//! Add-user command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Register a new user.
#[derive(Args)]
pub struct AddUserCommand {
    /// Username (must be unique)
    pub username: String,
}

impl AddUserCommand {
    /// Execute the add-user command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut catalog = open_catalog(global, &config)?;

        catalog.add_user(&self.username)?;
        println!("User '{}' added.", self.username);
        Ok(())
    }
}
