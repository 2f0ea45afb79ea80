//! Timestamped database backups
//!
//! Uses `VACUUM INTO`, which writes a consistent copy through SQLite
//! itself, so a WAL-mode database is captured with its un-checkpointed pages.

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use school_core::errors::{ErrorKind, RecordsError};
use std::path::{Path, PathBuf};

/// Back up the database next to its own file
///
/// The copy is named `<db file>_backup_<YYYYmmdd_HHMMSS>.db`. Returns its path.
///
/// # Errors
/// `InvalidInput` for an in-memory database, `Io` if the target already
/// exists, `Persistence` if SQLite fails to write the copy.
pub fn backup_database(conn: &Connection) -> Result<PathBuf> {
    let db_path = main_database_file(conn)?.ok_or_else(|| {
        RecordsError::new(ErrorKind::InvalidInput)
            .with_op("backup")
            .with_message("in-memory databases cannot be backed up")
    })?;

    let dest = backup_path_for(&db_path, chrono::Local::now().naive_local());
    backup_to(conn, &dest)?;
    Ok(dest)
}

/// Write a consistent copy of the database to `dest`
///
/// # Errors
/// `Io` if `dest` already exists, `Persistence` if SQLite fails.
pub fn backup_to(conn: &Connection, dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(io_error(
            "backup",
            std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("{} already exists", dest.display()),
            ),
        ));
    }

    let dest_str = dest.to_string_lossy().into_owned();
    conn.execute("VACUUM INTO ?1", [&dest_str])
        .map_err(|e| from_rusqlite(e).with_op("backup"))?;

    tracing::debug!(dest = %dest.display(), "database backed up");
    Ok(())
}

/// File backing the `main` schema, or None for an in-memory database
pub fn main_database_file(conn: &Connection) -> Result<Option<PathBuf>> {
    let file: String = conn
        .query_row(
            "SELECT file FROM pragma_database_list WHERE name = 'main'",
            [],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)?;
    if file.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(file)))
    }
}

/// `<db file>_backup_<YYYYmmdd_HHMMSS>.db`, in the same directory
pub fn backup_path_for(db_path: &Path, at: chrono::NaiveDateTime) -> PathBuf {
    let file_name = db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "school.db".to_string());
    let backup_name = format!("{}_backup_{}.db", file_name, at.format("%Y%m%d_%H%M%S"));
    db_path.with_file_name(backup_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store_in_memory;

    #[test]
    fn test_backup_path_format() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 1))
            .unwrap();
        let path = backup_path_for(Path::new("/data/school.db"), at);
        assert_eq!(
            path,
            PathBuf::from("/data/school.db_backup_20240309_070501.db")
        );
    }

    #[test]
    fn test_in_memory_backup_is_invalid_input() {
        let conn = open_store_in_memory().unwrap();
        let err = backup_database(&conn).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
