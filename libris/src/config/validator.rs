//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use libris::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration. Unset fields are not checked.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref file) = config.database_file {
            Self::validate_non_empty("database_file", file)?;
            if Path::new(file).is_absolute() {
                return Err(Error::Validation {
                    field: "database_file".into(),
                    message: "Must be relative to the data directory".into(),
                });
            }
        }

        if let Some(ref file) = config.log_file {
            Self::validate_non_empty("log_file", file)?;
        }

        if let Some(ref user) = config.default_user {
            Self::validate_non_empty("default_user", user)?;
        }

        if let Some(timeout) = config.busy_timeout_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "busy_timeout_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }
        Ok(())
    }
}
