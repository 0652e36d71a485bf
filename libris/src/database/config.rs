//! Database configuration and store location resolution.
//!
//! This module decides *where* the durable store lives: a file inside the
//! data directory, or a session-scoped in-memory database.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Name of the data directory under the user's home directory.
pub const DATA_DIR_NAME: &str = ".libris";

/// Default database file name inside the data directory.
pub const DEFAULT_DATABASE_FILE: &str = "libris.db";

/// Location marker for a non-persistent store.
pub const IN_MEMORY_MARKER: &str = ":memory:";

/// Where the durable store lives.
///
/// # Examples
///
/// ```
/// use libris::database::StoreLocation;
/// use std::path::PathBuf;
///
/// assert_eq!(StoreLocation::parse(":memory:"), StoreLocation::InMemory);
/// assert_eq!(StoreLocation::parse(""), StoreLocation::InMemory);
/// assert_eq!(
///     StoreLocation::parse("/tmp/libris.db"),
///     StoreLocation::File(PathBuf::from("/tmp/libris.db"))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// A database file on disk.
    File(PathBuf),
    /// A private in-memory database that disappears when the store is closed.
    InMemory,
}

impl StoreLocation {
    /// Interprets a location string, treating `":memory:"` and the empty
    /// string as the in-memory marker.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        if location.is_empty() || location == IN_MEMORY_MARKER {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// The file path, if the store is file-backed.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::InMemory => None,
        }
    }

    /// Whether the store survives the process.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::InMemory => f.write_str(IN_MEMORY_MARKER),
        }
    }
}

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use libris::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/libris.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
///
/// let scratch = DatabaseConfig::in_memory();
/// assert!(!scratch.location.is_persistent());
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Where the database lives.
    pub location: StoreLocation,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to create the parent directory and database file if missing.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Creates a configuration for a database file.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::at(StoreLocation::File(path.as_ref().to_path_buf()))
    }

    /// Creates a configuration for a session-scoped in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::at(StoreLocation::InMemory)
    }

    /// Creates a configuration for an already resolved location.
    #[must_use]
    pub fn at(location: StoreLocation) -> Self {
        Self {
            location,
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Requires the database file to exist already.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.libris`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(DATA_DIR_NAME))
}

/// Resolves the data directory.
///
/// The resolution order is:
/// 1. `$LIBRIS_DATA_DIR` if set
/// 2. `~/.libris` otherwise
///
/// # Errors
///
/// Returns an error if `LIBRIS_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var("LIBRIS_DATA_DIR") {
        Ok(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the database path, `<data dir>/libris.db`.
///
/// # Errors
///
/// See [`resolve_data_dir`].
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DEFAULT_DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(
            config.location,
            StoreLocation::File(PathBuf::from("/tmp/test.db"))
        );
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
    }

    #[test]
    fn test_config_in_memory() {
        let config = DatabaseConfig::in_memory();
        assert_eq!(config.location, StoreLocation::InMemory);
        assert!(config.location.path().is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = DatabaseConfig::new("/tmp/test.db")
            .with_busy_timeout(Duration::from_millis(10000))
            .without_auto_create();
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
        assert!(!config.auto_create);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(StoreLocation::InMemory.to_string(), ":memory:");
        assert_eq!(
            StoreLocation::parse("/data/libris.db").to_string(),
            "/data/libris.db"
        );
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        let saved = std::env::var("LIBRIS_DATA_DIR").ok();

        std::env::remove_var("LIBRIS_DATA_DIR");
        if let Ok(path) = resolve_database_path() {
            assert!(path.ends_with(".libris/libris.db"));
        }

        std::env::set_var("LIBRIS_DATA_DIR", "/custom/data");
        let path = resolve_database_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/libris.db"));

        match saved {
            Some(val) => std::env::set_var("LIBRIS_DATA_DIR", val),
            None => std::env::remove_var("LIBRIS_DATA_DIR"),
        }
    }
}
