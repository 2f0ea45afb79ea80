//! Error handling for school-store
//!
//! Maps rusqlite failures onto the `RecordsError` taxonomy

use rusqlite::ffi;
use school_core::errors::{ErrorKind, RecordsError};

/// Result type alias using RecordsError
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RecordsError {
    RecordsError::new(ErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error for an already-applied migration
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> RecordsError {
    RecordsError::new(ErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create an error for a connection on which foreign keys did not turn on
pub fn foreign_keys_disabled() -> RecordsError {
    RecordsError::new(ErrorKind::Persistence)
        .with_op("configure")
        .with_message("foreign key enforcement could not be enabled")
}

/// Create a database error from rusqlite::Error
///
/// `SQLITE_CONSTRAINT` failures become `ConstraintViolation` with the
/// constraint sub-kind in the message; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> RecordsError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, detail)
            if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            let detail = detail.clone().unwrap_or_else(|| failure.to_string());
            RecordsError::new(ErrorKind::ConstraintViolation)
                .with_op("sqlite")
                .with_message(format!(
                    "{} constraint violated: {}",
                    constraint_label(failure.extended_code),
                    detail
                ))
        }
        _ => RecordsError::new(ErrorKind::Persistence)
            .with_op("sqlite")
            .with_message(err.to_string()),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> RecordsError {
    RecordsError::new(ErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

fn constraint_label(extended_code: i32) -> &'static str {
    if extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY {
        "primary key"
    } else if extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE {
        "unique"
    } else if extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
        "foreign key"
    } else if extended_code == ffi::SQLITE_CONSTRAINT_NOTNULL {
        "not null"
    } else if extended_code == ffi::SQLITE_CONSTRAINT_CHECK {
        "check"
    } else {
        "integrity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(extended_code: i32, msg: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(extended_code), Some(msg.to_string()))
    }

    #[test]
    fn test_unique_failure_maps_to_constraint_violation() {
        let err = from_rusqlite(failure(
            ffi::SQLITE_CONSTRAINT_UNIQUE,
            "UNIQUE constraint failed: students.email",
        ));

        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        assert!(err.message().starts_with("unique constraint violated"));
        assert!(err.message().contains("students.email"));
    }

    #[test]
    fn test_foreign_key_failure_is_labelled() {
        let err = from_rusqlite(failure(
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            "FOREIGN KEY constraint failed",
        ));

        assert_eq!(err.kind(), ErrorKind::ConstraintViolation);
        assert!(err.message().starts_with("foreign key"));
    }

    #[test]
    fn test_other_failures_are_persistence() {
        let err = from_rusqlite(rusqlite::Error::InvalidQuery);
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}
