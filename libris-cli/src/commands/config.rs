//! Config command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use clap::Args;

/// Print the effective configuration as YAML.
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let data_dir = resolve_data_dir(global)?;

        let yaml = serde_yaml::to_string(&config).map_err(|e| CliError::Config(e.to_string()))?;
        println!("# data directory: {}", data_dir.display());
        print!("{yaml}");
        Ok(())
    }
}
