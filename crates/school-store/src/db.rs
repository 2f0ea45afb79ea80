//! Database connection management
//!
//! Every connection handed out here has foreign-key enforcement switched on
//! and verified. SQLite defaults it to off per connection, which would leave
//! the ON DELETE actions and reference checks in the schema inert.

use crate::errors::{foreign_keys_disabled, from_rusqlite, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Connection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Use write-ahead logging (file-backed databases only)
    pub wal: bool,
    /// How long a writer waits on a locked database before failing
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            wal: true,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

/// Open a SQLite database at the given path with default options
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    open_with(path, StoreOptions::default())
}

/// Open a SQLite database at the given path
pub fn open_with<P: AsRef<Path>>(path: P, options: StoreOptions) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn, options)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(
        &conn,
        StoreOptions {
            wal: false,
            ..StoreOptions::default()
        },
    )?;
    Ok(conn)
}

/// Open a database and bring its schema up to date
pub fn open_store<P: AsRef<Path>>(path: P, options: StoreOptions) -> Result<Connection> {
    let mut conn = open_with(path, options)?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

/// In-memory counterpart of [`open_store`]
pub fn open_store_in_memory() -> Result<Connection> {
    let mut conn = open_in_memory()?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// Must run outside a transaction: `PRAGMA foreign_keys` is a no-op inside one.
pub fn configure(conn: &Connection, options: StoreOptions) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    if !foreign_keys_enabled(conn)? {
        return Err(foreign_keys_disabled());
    }

    if options.wal {
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "journal mode set");
    }

    conn.busy_timeout(options.busy_timeout)
        .map_err(from_rusqlite)?;

    Ok(())
}

/// Read back whether foreign-key enforcement is active on this connection
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool> {
    let on: i64 = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(on == 1)
}
