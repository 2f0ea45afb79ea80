use super::students::student_from_row;
use super::SqliteRepo;
use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use school_core::errors::{RecordsError, SchoolError};
use school_core::model::{Course, Student};
use school_core::rules::validation;

pub(super) fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        course_id: row.get(0)?,
        course_name: row.get(1)?,
        instructor_id: row.get(2)?,
    })
}

impl SqliteRepo {
    /// Insert a new course, optionally assigned to an instructor
    ///
    /// # Errors
    /// `ConstraintViolation` on a duplicate id, a blank required field, or an
    /// instructor_id that matches no instructor.
    pub fn insert_course(conn: &Connection, course: &Course) -> Result<()> {
        validation::validate_course(course)?;

        conn.execute(
            "INSERT INTO courses (course_id, course_name, instructor_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![course.course_id, course.course_name, course.instructor_id],
        )
        .map_err(|e| {
            from_rusqlite(e)
                .with_op("insert_course")
                .with_entity_id(&course.course_id)
        })?;

        tracing::debug!(
            course_id = %course.course_id,
            assigned = course.is_assigned(),
            "course inserted"
        );
        Ok(())
    }

    pub fn get_course(conn: &Connection, course_id: &str) -> Result<Option<Course>> {
        conn.query_row(
            "SELECT course_id, course_name, instructor_id FROM courses WHERE course_id = ?",
            [course_id],
            course_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All courses ordered by ID
    pub fn list_courses(conn: &Connection) -> Result<Vec<Course>> {
        let mut stmt = conn
            .prepare("SELECT course_id, course_name, instructor_id FROM courses ORDER BY course_id")
            .map_err(from_rusqlite)?;
        let courses = stmt
            .query_map([], course_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(courses)
    }

    /// Replace course_name and instructor of an existing course
    ///
    /// Passing `instructor_id: None` unassigns the course.
    ///
    /// # Errors
    /// `NotFound` if no course has this ID; otherwise as `insert_course`.
    pub fn update_course(conn: &Connection, course: &Course) -> Result<()> {
        validation::validate_course(course)?;

        let changed = conn
            .execute(
                "UPDATE courses SET course_name = ?1, instructor_id = ?2 WHERE course_id = ?3",
                rusqlite::params![course.course_name, course.instructor_id, course.course_id],
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("update_course")
                    .with_entity_id(&course.course_id)
            })?;

        if changed == 0 {
            return Err(RecordsError::from(SchoolError::CourseNotFound {
                course_id: course.course_id.clone(),
            })
            .with_op("update_course"));
        }
        Ok(())
    }

    /// Delete a course and, by cascade, its registrations
    ///
    /// Returns whether a row was removed.
    pub fn delete_course(conn: &Connection, course_id: &str) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM courses WHERE course_id = ?", [course_id])
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("delete_course")
                    .with_entity_id(course_id)
            })?;
        Ok(removed > 0)
    }

    /// Students registered in the course, ordered by name
    pub fn list_students_for_course(conn: &Connection, course_id: &str) -> Result<Vec<Student>> {
        let mut stmt = conn
            .prepare(
                "SELECT s.student_id, s.name, s.age, s.email
                 FROM registrations r
                 JOIN students s ON r.student_id = s.student_id
                 WHERE r.course_id = ?
                 ORDER BY s.name, s.student_id",
            )
            .map_err(from_rusqlite)?;
        let students = stmt
            .query_map([course_id], student_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(students)
    }
}
