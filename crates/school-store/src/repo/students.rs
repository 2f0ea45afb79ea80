use super::courses::course_from_row;
use super::SqliteRepo;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use school_core::errors::{RecordsError, SchoolError};
use school_core::model::{Course, Student};
use school_core::rules::validation;
use school_core_types::Sensitive;

pub(super) fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        student_id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        email: row.get(3)?,
    })
}

impl SqliteRepo {
    /// Insert a new student
    ///
    /// # Errors
    /// `ConstraintViolation` on a duplicate id or email, or a blank required
    /// field; `InvalidInput` on a malformed email or negative age.
    pub fn insert_student(conn: &Connection, student: &Student) -> Result<()> {
        validation::validate_student(student)?;

        conn.execute(
            "INSERT INTO students (student_id, name, age, email) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![student.student_id, student.name, student.age, student.email],
        )
        .map_err(|e| {
            from_rusqlite(e)
                .with_op("insert_student")
                .with_entity_id(&student.student_id)
        })?;

        tracing::debug!(
            student_id = %student.student_id,
            email = %Sensitive::new(&student.email),
            "student inserted"
        );
        Ok(())
    }

    /// Get a student by ID
    pub fn get_student(conn: &Connection, student_id: &str) -> Result<Option<Student>> {
        conn.query_row(
            "SELECT student_id, name, age, email FROM students WHERE student_id = ?",
            [student_id],
            student_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All students ordered by ID
    pub fn list_students(conn: &Connection) -> Result<Vec<Student>> {
        let mut stmt = conn
            .prepare("SELECT student_id, name, age, email FROM students ORDER BY student_id")
            .map_err(from_rusqlite)?;
        let students = stmt
            .query_map([], student_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(students)
    }

    /// Replace name, age and email of an existing student
    ///
    /// # Errors
    /// `NotFound` if no student has this ID; otherwise as `insert_student`.
    pub fn update_student(conn: &Connection, student: &Student) -> Result<()> {
        validation::validate_student(student)?;

        let changed = conn
            .execute(
                "UPDATE students SET name = ?1, age = ?2, email = ?3 WHERE student_id = ?4",
                rusqlite::params![student.name, student.age, student.email, student.student_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("update_student")
                    .with_entity_id(&student.student_id)
            })?;

        if changed == 0 {
            return Err(RecordsError::from(SchoolError::StudentNotFound {
                student_id: student.student_id.clone(),
            })
            .with_op("update_student"));
        }
        Ok(())
    }

    /// Delete a student and, by cascade, their registrations
    ///
    /// Returns whether a row was removed.
    pub fn delete_student(conn: &Connection, student_id: &str) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM students WHERE student_id = ?", [student_id])
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("delete_student")
                    .with_entity_id(student_id)
            })?;
        Ok(removed > 0)
    }

    /// Courses the student is registered in, ordered by course name
    pub fn list_courses_for_student(conn: &Connection, student_id: &str) -> Result<Vec<Course>> {
        let mut stmt = conn
            .prepare(
                "SELECT c.course_id, c.course_name, c.instructor_id
                 FROM registrations r
                 JOIN courses c ON r.course_id = c.course_id
                 WHERE r.student_id = ?
                 ORDER BY c.course_name, c.course_id",
            )
            .map_err(from_rusqlite)?;
        let courses = stmt
            .query_map([student_id], course_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(courses)
    }
}
