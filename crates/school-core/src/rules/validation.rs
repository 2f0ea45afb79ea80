//! Field validation applied before a row is written
//!
//! SQLite enforces keys, uniqueness and references. These checks cover what
//! the schema cannot express: blank required text, malformed emails and
//! negative ages.

use crate::errors::{Result, SchoolError};
use crate::model::{Course, Instructor, Student};

/// Validate a Student prior to insert or update
///
/// # Errors
/// `MissingField` for blank id/name/email, `InvalidAge`, `InvalidEmail`.
pub fn validate_student(student: &Student) -> Result<()> {
    require_text("student", "student_id", &student.student_id)?;
    validate_person("student", &student.name, student.age, &student.email)
}

/// Validate an Instructor prior to insert or update
///
/// # Errors
/// `MissingField` for blank id/name/email, `InvalidAge`, `InvalidEmail`.
pub fn validate_instructor(instructor: &Instructor) -> Result<()> {
    require_text("instructor", "instructor_id", &instructor.instructor_id)?;
    validate_person(
        "instructor",
        &instructor.name,
        instructor.age,
        &instructor.email,
    )
}

/// Validate a Course prior to insert or update
///
/// An absent instructor is fine. A present but blank one is treated as
/// missing rather than silently unassigned.
///
/// # Errors
/// `MissingField` for blank course_id, course_name or instructor_id.
pub fn validate_course(course: &Course) -> Result<()> {
    require_text("course", "course_id", &course.course_id)?;
    require_text("course", "course_name", &course.course_name)?;
    if let Some(instructor_id) = &course.instructor_id {
        require_text("course", "instructor_id", instructor_id)?;
    }
    Ok(())
}

/// Validate the two references of a registration
///
/// # Errors
/// `MissingField` for a blank student_id or course_id.
pub fn validate_registration(student_id: &str, course_id: &str) -> Result<()> {
    require_text("registration", "student_id", student_id)?;
    require_text("registration", "course_id", course_id)
}

fn validate_person(entity: &str, name: &str, age: Option<i64>, email: &str) -> Result<()> {
    require_text(entity, "name", name)?;
    require_text(entity, "email", email)?;
    if let Some(age) = age {
        validate_age(age)?;
    }
    validate_email(email)
}

/// Ages are non-negative
pub fn validate_age(age: i64) -> Result<()> {
    if age < 0 {
        return Err(SchoolError::InvalidAge { age });
    }
    Ok(())
}

/// Minimal email shape: must contain '@' and '.'
pub fn validate_email(email: &str) -> Result<()> {
    if !email.contains('@') || !email.contains('.') {
        return Err(SchoolError::InvalidEmail {
            email: email.to_string(),
        });
    }
    Ok(())
}

fn require_text(entity: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SchoolError::MissingField {
            entity: entity.to_string(),
            field: field.to_string(),
        });
    }
    Ok(())
}
