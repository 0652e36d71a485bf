//! History command implementation.

use crate::error::CliError;
use crate::utils::{current_user, load_configuration, open_catalog, GlobalOptions};
use clap::Args;

/// Show the titles the current user has borrowed.
#[derive(Args)]
pub struct HistoryCommand {}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = open_catalog(global, &config)?;
        let user = current_user(global, &config);

        let titles = catalog
            .user_history(&user)
            .ok_or(libris::Error::UserNotFound { username: user })?;

        if titles.is_empty() {
            println!("(empty)");
        }
        for title in titles {
            println!("{title}");
        }
        Ok(())
    }
}
