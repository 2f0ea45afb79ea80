// Integration tests for file-backed backups

use school_core::model::Student;
use school_store::backup::{backup_database, backup_to, main_database_file};
use school_store::db::{open_store, StoreOptions};
use school_store::SqliteRepo;
use tempfile::TempDir;

#[test]
fn test_backup_contains_committed_rows() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("school.db");
    let conn = open_store(&db_path, StoreOptions::default()).unwrap();
    SqliteRepo::insert_student(&conn, &Student::new("S1", "Ada", "a@x.com")).unwrap();

    let backup_path = backup_database(&conn).unwrap();

    assert!(backup_path.exists());
    assert_eq!(backup_path.parent(), db_path.parent());
    let name = backup_path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("school.db_backup_"));
    assert!(name.ends_with(".db"));

    let copy = open_store(&backup_path, StoreOptions::default()).unwrap();
    assert_eq!(SqliteRepo::list_students(&copy).unwrap().len(), 1);
}

#[test]
fn test_backup_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let conn = open_store(dir.path().join("school.db"), StoreOptions::default()).unwrap();
    let dest = dir.path().join("copy.db");

    backup_to(&conn, &dest).unwrap();
    let err = backup_to(&conn, &dest).unwrap_err();

    assert_eq!(err.kind(), school_core::errors::ErrorKind::Io);
}

#[test]
fn test_main_database_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("school.db");
    let conn = open_store(&db_path, StoreOptions::default()).unwrap();

    let reported = main_database_file(&conn).unwrap().unwrap();
    assert_eq!(reported.file_name(), db_path.file_name());
}
