//! Configuration schema definitions.
//!
//! Every field is optional so partial files and environment overrides can
//! be layered; the accessor methods fall back to the built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::DEFAULT_DATABASE_FILE;
use crate::logging::LogLevel;

/// Default log file, relative to the data directory.
pub const DEFAULT_LOG_FILE: &str = "logs/libris.log";

/// Default name of the user the front end acts as.
pub const DEFAULT_USER: &str = "default_user";

/// Default wait for a database lock, in seconds.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use libris::config::Config;
///
/// let config = Config {
///     default_user: Some("alice".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.default_user(), "alice");
/// assert_eq!(config.busy_timeout().as_secs(), 5);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file name, relative to the data directory.
    pub database_file: Option<String>,

    /// Log file, relative to the data directory unless absolute.
    pub log_file: Option<String>,

    /// Verbosity of the stderr logger.
    pub log_level: Option<LogLevel>,

    /// User that commands act as when none is given.
    pub default_user: Option<String>,

    /// Maximum time to wait for a database lock (seconds).
    pub busy_timeout_seconds: Option<u64>,
}

impl Config {
    /// A configuration with every field set to its built-in default.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            database_file: Some(DEFAULT_DATABASE_FILE.to_string()),
            log_file: Some(DEFAULT_LOG_FILE.to_string()),
            log_level: Some(LogLevel::Normal),
            default_user: Some(DEFAULT_USER.to_string()),
            busy_timeout_seconds: Some(DEFAULT_BUSY_TIMEOUT_SECONDS),
        }
    }

    /// Database path inside `data_dir`.
    #[must_use]
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(
            self.database_file
                .as_deref()
                .unwrap_or(DEFAULT_DATABASE_FILE),
        )
    }

    /// Log file path; relative values are resolved against `data_dir`.
    #[must_use]
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE))
    }

    /// Effective log level.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or(LogLevel::Normal)
    }

    /// Effective default user.
    #[must_use]
    pub fn default_user(&self) -> &str {
        self.default_user.as_deref().unwrap_or(DEFAULT_USER)
    }

    /// Effective busy timeout.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }
}
