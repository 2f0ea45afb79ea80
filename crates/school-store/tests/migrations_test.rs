// Integration tests for the migration framework and connection setup

use rusqlite::Connection;
use school_store::db;
use school_store::migrations::{applied_migrations, apply_migrations};

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = db::open_in_memory().unwrap();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    let expected = vec![
        "courses",
        "instructors",
        "registrations",
        "schema_version",
        "sqlite_sequence", // created by AUTOINCREMENT on registrations
        "students",
    ];
    assert_eq!(tables, expected);
}

#[test]
fn test_migration_idempotency() {
    let mut conn = db::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 1);
    assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_school_schema"]);
}

#[test]
fn test_checksum_recorded() {
    let conn = db::open_store_in_memory().unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            ["001_school_schema"],
            |row| row.get(0),
        )
        .unwrap();

    assert_eq!(checksum.len(), 64, "SHA256 checksum should be 64 hex chars");
}

#[test]
fn test_declared_foreign_keys() {
    let conn = db::open_store_in_memory().unwrap();

    // (table, from, to, on_delete)
    let mut fks: Vec<(String, String, String, String)> = Vec::new();
    for table in ["courses", "registrations"] {
        let mut stmt = conn
            .prepare(&format!("SELECT \"from\", \"table\", on_delete FROM pragma_foreign_key_list('{}')", table))
            .unwrap();
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    table.to_string(),
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        fks.extend(rows);
    }
    fks.sort();

    assert_eq!(
        fks,
        vec![
            (
                "courses".to_string(),
                "instructor_id".to_string(),
                "instructors".to_string(),
                "SET NULL".to_string()
            ),
            (
                "registrations".to_string(),
                "course_id".to_string(),
                "courses".to_string(),
                "CASCADE".to_string()
            ),
            (
                "registrations".to_string(),
                "student_id".to_string(),
                "students".to_string(),
                "CASCADE".to_string()
            ),
        ]
    );
}

#[test]
fn test_reopened_file_keeps_schema_and_enforcement() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("school.db");

    drop(db::open_store(&path, db::StoreOptions::default()).unwrap());
    let conn = db::open_store(&path, db::StoreOptions::default()).unwrap();

    assert!(db::foreign_keys_enabled(&conn).unwrap());
    assert_eq!(applied_migrations(&conn).unwrap().len(), 1);
}
