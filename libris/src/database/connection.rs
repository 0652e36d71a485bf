//! Database connection management.
//!
//! This module opens the `SQLite` connection, applies PRAGMA settings and
//! makes sure the schema exists.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::{DatabaseConfig, StoreLocation};

/// A database connection wrapper with configuration.
///
/// # Examples
///
/// ```
/// use libris::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::in_memory()).unwrap();
/// assert!(!db.location().is_persistent());
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database (or a private in-memory database)
    /// - Set WAL mode for file-backed stores
    /// - Enable foreign key enforcement and the busy timeout
    /// - Create the schema if it does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let conn = match &config.location {
            StoreLocation::InMemory => Connection::open_in_memory()?,
            StoreLocation::File(path) => {
                if config.auto_create && !path.exists() {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            std::fs::create_dir_all(parent)?;
                        }
                    }
                } else if !config.auto_create && !path.exists() {
                    return Err(Error::InvalidPath {
                        path: path.clone(),
                        reason: "database does not exist and auto-create is disabled".into(),
                    });
                }

                let flags = if config.auto_create {
                    OpenFlags::SQLITE_OPEN_READ_WRITE
                        | OpenFlags::SQLITE_OPEN_CREATE
                        | OpenFlags::SQLITE_OPEN_NO_MUTEX
                } else {
                    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
                };
                let conn = Connection::open_with_flags(path, flags)?;

                // PRAGMA journal_mode returns a result, so we use query_row
                let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
                conn.execute_batch("PRAGMA synchronous = NORMAL")?;
                conn
            }
        };

        conn.execute_batch("PRAGMA foreign_keys = ON")?;
        conn.busy_timeout(config.busy_timeout)?;

        super::schema::initialize_schema(&conn)?;
        log::debug!("opened catalog database at {}", config.location);

        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Where this database lives.
    #[must_use]
    pub const fn location(&self) -> &StoreLocation {
        &self.config.location
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns the `SQLite` error if the connection could not be closed
    /// cleanly (for example because of unfinalized statements).
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| Error::Database(e))
    }
}
