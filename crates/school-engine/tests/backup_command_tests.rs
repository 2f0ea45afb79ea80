#![allow(clippy::unwrap_used, clippy::expect_used)]

use school_core::logging_facility::test_capture::init_test_capture;
use school_core::{Command, ErrorKind, Student};
use school_core_types::schema::{EVENT_END, EVENT_END_ERROR};
use school_core_types::RequestContext;
use school_engine::{apply_engine_command, backup};
use school_store::db::{open_store, open_store_in_memory, StoreOptions};
use tempfile::TempDir;

#[test]
fn test_backup_writes_copy_next_to_database() {
    let capture = init_test_capture();
    let tmp = TempDir::new().unwrap();
    let conn = open_store(tmp.path().join("school.db"), StoreOptions::default()).unwrap();
    apply_engine_command(
        Command::StudentCreate {
            student: Student::new("S1", "Ann", "ann@x.com"),
        },
        &conn,
    )
    .unwrap();

    let path = backup(&conn, &RequestContext::new()).unwrap();

    assert!(path.exists());
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("school.db_backup_"));
    assert!(name.ends_with(".db"));

    let copy = open_store(&path, StoreOptions::default()).unwrap();
    let count: i64 = copy
        .query_row("SELECT COUNT(*) FROM students", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);

    let path_str = path.display().to_string();
    let ended = capture.count_events(|e| {
        e.op.as_deref() == Some("backup")
            && e.event.as_deref() == Some(EVENT_END)
            && e.fields.get("path") == Some(&path_str)
    });
    assert_eq!(ended, 1);
}

#[test]
fn test_backup_of_in_memory_database_fails() {
    let capture = init_test_capture();
    let conn = open_store_in_memory().unwrap();

    let err = backup(&conn, &RequestContext::new()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(
        capture.count_events(|e| {
            e.op.as_deref() == Some("backup") && e.event.as_deref() == Some(EVENT_END_ERROR)
        }) >= 1
    );
}
