//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and opening
//! the catalog with its log sinks.

use crate::error::CliError;
use libris::events::MultiSink;
use libris::{Catalog, Config, ConfigBuilder, DatabaseConfig, FileLogger, LogLevel, Logger};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Act as this user instead of the configured default.
    pub user: Option<String>,
}

/// Resolve the data directory: `--data-dir` / `LIBRIS_DATA_DIR`, else `~/.libris`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => libris::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `<data dir>/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let overrides = Config {
        busy_timeout_seconds: global.busy_timeout,
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The stderr verbosity: flags first, then configuration.
pub fn log_level(global: &GlobalOptions, config: &Config) -> LogLevel {
    if global.verbose || global.quiet {
        libris::init_logger(global.verbose, global.quiet).level()
    } else {
        config.log_level()
    }
}

/// The user commands act as.
pub fn current_user(global: &GlobalOptions, config: &Config) -> String {
    global
        .user
        .clone()
        .unwrap_or_else(|| config.default_user().to_string())
}

/// Open the catalog in the data directory.
///
/// Events go to the log file and to stderr at the configured verbosity.
/// The configured default user is registered if it does not exist yet.
pub fn open_catalog(global: &GlobalOptions, config: &Config) -> Result<Catalog, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let db_config =
        DatabaseConfig::new(config.database_path(&data_dir)).with_busy_timeout(config.busy_timeout());

    let sink = MultiSink::new()
        .with(FileLogger::new(config.log_path(&data_dir)))
        .with(Logger::new(log_level(global, config)));

    let mut catalog = Catalog::open(db_config, sink)?;

    let default_user = config.default_user();
    if catalog.user(default_user).is_none() {
        catalog.add_user(default_user)?;
    }

    Ok(catalog)
}

/// Ask a yes/no question on stderr and read the answer from stdin.
///
/// Anything other than `y` or `yes` (any case) counts as no, including
/// end of input.
pub fn confirm(prompt: &str) -> Result<bool, CliError> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
