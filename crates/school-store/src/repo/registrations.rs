use super::SqliteRepo;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use school_core::errors::{RecordsError, SchoolError};
use school_core::model::{Registration, RegistrationView};
use school_core::rules::validation;

fn registration_from_row(row: &Row<'_>) -> rusqlite::Result<Registration> {
    Ok(Registration {
        registration_id: row.get(0)?,
        student_id: row.get(1)?,
        course_id: row.get(2)?,
    })
}

impl SqliteRepo {
    /// Register a student in a course
    ///
    /// Returns the generated registration id.
    ///
    /// # Errors
    /// `ConstraintViolation` if the student is already registered in the
    /// course, or either reference matches no row.
    pub fn insert_registration(conn: &Connection, student_id: &str, course_id: &str) -> Result<i64> {
        validation::validate_registration(student_id, course_id)?;

        conn.execute(
            "INSERT INTO registrations (student_id, course_id) VALUES (?1, ?2)",
            [student_id, course_id],
        )
        .map_err(|e| {
            from_rusqlite(e)
                .with_op("insert_registration")
                .with_entity_id(format!("{}/{}", student_id, course_id))
        })?;

        let registration_id = conn.last_insert_rowid();
        tracing::debug!(registration_id, student_id, course_id, "registration inserted");
        Ok(registration_id)
    }

    pub fn get_registration(
        conn: &Connection,
        registration_id: i64,
    ) -> Result<Option<Registration>> {
        conn.query_row(
            "SELECT registration_id, student_id, course_id FROM registrations
             WHERE registration_id = ?",
            [registration_id],
            registration_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All registrations ordered by id (i.e. creation order)
    pub fn list_registrations(conn: &Connection) -> Result<Vec<Registration>> {
        let mut stmt = conn
            .prepare(
                "SELECT registration_id, student_id, course_id FROM registrations
                 ORDER BY registration_id",
            )
            .map_err(from_rusqlite)?;
        let registrations = stmt
            .query_map([], registration_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(registrations)
    }

    /// Re-point an existing registration at another student/course pair
    ///
    /// # Errors
    /// `NotFound` if the id matches no registration; otherwise as
    /// `insert_registration`.
    pub fn update_registration(
        conn: &Connection,
        registration_id: i64,
        student_id: &str,
        course_id: &str,
    ) -> Result<()> {
        validation::validate_registration(student_id, course_id)?;

        let changed = conn
            .execute(
                "UPDATE registrations SET student_id = ?1, course_id = ?2
                 WHERE registration_id = ?3",
                rusqlite::params![student_id, course_id, registration_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("update_registration")
                    .with_entity_id(registration_id.to_string())
            })?;

        if changed == 0 {
            return Err(
                RecordsError::from(SchoolError::RegistrationNotFound { registration_id })
                    .with_op("update_registration"),
            );
        }
        Ok(())
    }

    /// Delete a registration by id; returns whether a row was removed
    pub fn delete_registration(conn: &Connection, registration_id: i64) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM registrations WHERE registration_id = ?",
                [registration_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("delete_registration")
                    .with_entity_id(registration_id.to_string())
            })?;
        Ok(removed > 0)
    }

    /// Unregister a student from a course; returns whether a row was removed
    pub fn remove_registration(conn: &Connection, student_id: &str, course_id: &str) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM registrations WHERE student_id = ?1 AND course_id = ?2",
                [student_id, course_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("remove_registration")
                    .with_entity_id(format!("{}/{}", student_id, course_id))
            })?;
        Ok(removed > 0)
    }

    /// Registrations joined with student and course names
    ///
    /// Ordered by student name, then course name.
    pub fn list_registrations_for_display(conn: &Connection) -> Result<Vec<RegistrationView>> {
        let mut stmt = conn
            .prepare(
                "SELECT r.registration_id, s.student_id, s.name, c.course_id, c.course_name
                 FROM registrations r
                 JOIN students s ON r.student_id = s.student_id
                 JOIN courses c ON r.course_id = c.course_id
                 ORDER BY s.name, c.course_name, r.registration_id",
            )
            .map_err(from_rusqlite)?;
        let views = stmt
            .query_map([], |row| {
                Ok(RegistrationView {
                    registration_id: row.get(0)?,
                    student_id: row.get(1)?,
                    student_name: row.get(2)?,
                    course_id: row.get(3)?,
                    course_name: row.get(4)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(views)
    }
}
