use super::courses::course_from_row;
use super::SqliteRepo;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use school_core::errors::{RecordsError, SchoolError};
use school_core::model::{Course, Instructor};
use school_core::rules::validation;
use school_core_types::Sensitive;

fn instructor_from_row(row: &Row<'_>) -> rusqlite::Result<Instructor> {
    Ok(Instructor {
        instructor_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        email: row.get(3)?,
    })
}

impl SqliteRepo {
    /// Insert a new instructor
    ///
    /// # Errors
    /// `ConstraintViolation` on a duplicate id or email, or a blank required
    /// field; `InvalidInput` on a malformed email or negative age.
    pub fn insert_instructor(conn: &Connection, instructor: &Instructor) -> Result<()> {
        validation::validate_instructor(instructor)?;

        conn.execute(
            "INSERT INTO instructors (instructor_id, name, age, email) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                instructor.instructor_id,
                instructor.name,
                instructor.age,
                instructor.email
            ],
        )
        .map_err(|e| {
            from_rusqlite(e)
                .with_op("insert_instructor")
                .with_entity_id(&instructor.instructor_id)
        })?;

        tracing::debug!(
            instructor_id = %instructor.instructor_id,
            email = %Sensitive::new(&instructor.email),
            "instructor inserted"
        );
        Ok(())
    }

    pub fn get_instructor(conn: &Connection, instructor_id: &str) -> Result<Option<Instructor>> {
        conn.query_row(
            "SELECT instructor_id, name, age, email FROM instructors WHERE instructor_id = ?",
            [instructor_id],
            instructor_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All instructors ordered by ID
    pub fn list_instructors(conn: &Connection) -> Result<Vec<Instructor>> {
        let mut stmt = conn
            .prepare(
                "SELECT instructor_id, name, age, email FROM instructors ORDER BY instructor_id",
            )
            .map_err(from_rusqlite)?;
        let instructors = stmt
            .query_map([], instructor_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(instructors)
    }

    /// Replace name, age and email of an existing instructor
    ///
    /// # Errors
    /// `NotFound` if no instructor has this ID; otherwise as `insert_instructor`.
    pub fn update_instructor(conn: &Connection, instructor: &Instructor) -> Result<()> {
        validation::validate_instructor(instructor)?;

        let changed = conn
            .execute(
                "UPDATE instructors SET name = ?1, age = ?2, email = ?3 WHERE instructor_id = ?4",
                rusqlite::params![
                    instructor.name,
                    instructor.age,
                    instructor.email,
                    instructor.instructor_id
                ],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("update_instructor")
                    .with_entity_id(&instructor.instructor_id)
            })?;

        if changed == 0 {
            return Err(RecordsError::from(SchoolError::InstructorNotFound {
                instructor_id: instructor.instructor_id.clone(),
            })
            .with_op("update_instructor"));
        }
        Ok(())
    }

    /// Delete an instructor; courses they taught become unassigned
    ///
    /// Returns whether a row was removed.
    pub fn delete_instructor(conn: &Connection, instructor_id: &str) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM instructors WHERE instructor_id = ?",
                [instructor_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("delete_instructor")
                    .with_entity_id(instructor_id)
            })?;
        Ok(removed > 0)
    }

    /// Courses assigned to the instructor, ordered by course name
    pub fn list_courses_for_instructor(
        conn: &Connection,
        instructor_id: &str,
    ) -> Result<Vec<Course>> {
        let mut stmt = conn
            .prepare(
                "SELECT course_id, course_name, instructor_id FROM courses
                 WHERE instructor_id = ?
                 ORDER BY course_name, course_id",
            )
            .map_err(from_rusqlite)?;
        let courses = stmt
            .query_map([instructor_id], course_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(courses)
    }
}
