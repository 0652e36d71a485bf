//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `LIBRIS_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Overrides the log level (`quiet`, `normal`, `verbose`).
pub const LOG_MODE_VAR: &str = "LIBRIS_LOG_MODE";

/// Overrides the default user.
pub const DEFAULT_USER_VAR: &str = "LIBRIS_DEFAULT_USER";

/// Overrides the busy timeout, in seconds.
pub const BUSY_TIMEOUT_VAR: &str = "LIBRIS_BUSY_TIMEOUT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use libris::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be
    /// parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(LOG_MODE_VAR) {
            config.log_level = Some(LogLevel::parse(&val).map_err(|message| {
                Error::Validation {
                    field: LOG_MODE_VAR.into(),
                    message,
                }
            })?);
        }

        if let Ok(user) = env::var(DEFAULT_USER_VAR) {
            config.default_user = Some(user);
        }

        if let Ok(seconds) = env::var(BUSY_TIMEOUT_VAR) {
            config.busy_timeout_seconds = Some(Self::parse_seconds(BUSY_TIMEOUT_VAR, &seconds)?);
        }

        Ok(())
    }

    fn parse_seconds(field: &str, s: &str) -> Result<u64> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
