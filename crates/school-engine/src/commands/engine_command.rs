//! Engine-level dispatch of front-end commands.

use rusqlite::Connection;
use school_core::model::{Course, Instructor, Registration, RegistrationView, Student};
use school_core::{log_op_end, log_op_error, log_op_start, Command};
use school_core_types::{RequestContext, TraceId};
use school_store::errors::Result;
use school_store::SqliteRepo;
use serde::Serialize;

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineCommandResult {
    /// A create or update went through.
    Done,
    /// A delete ran; `false` means there was no such row.
    Removed(bool),
    /// A registration was created with this id.
    RegistrationCreated(i64),
    Student(Option<Student>),
    Students(Vec<Student>),
    Instructor(Option<Instructor>),
    Instructors(Vec<Instructor>),
    Course(Option<Course>),
    Courses(Vec<Course>),
    Registrations(Vec<Registration>),
    RegistrationViews(Vec<RegistrationView>),
}

impl EngineCommandResult {
    /// Number of rows carried by a read result, if it is one.
    pub fn row_count(&self) -> Option<usize> {
        match self {
            EngineCommandResult::Student(s) => Some(usize::from(s.is_some())),
            EngineCommandResult::Instructor(i) => Some(usize::from(i.is_some())),
            EngineCommandResult::Course(c) => Some(usize::from(c.is_some())),
            EngineCommandResult::Students(v) => Some(v.len()),
            EngineCommandResult::Instructors(v) => Some(v.len()),
            EngineCommandResult::Courses(v) => Some(v.len()),
            EngineCommandResult::Registrations(v) => Some(v.len()),
            EngineCommandResult::RegistrationViews(v) => Some(v.len()),
            EngineCommandResult::Done
            | EngineCommandResult::Removed(_)
            | EngineCommandResult::RegistrationCreated(_) => None,
        }
    }
}

/// Apply a command under a fresh request context.
pub fn apply_engine_command(cmd: Command, conn: &Connection) -> Result<EngineCommandResult> {
    apply_engine_command_with_context(cmd, conn, &RequestContext::new())
}

/// Apply a command, tagging its log events and any error with `ctx`.
///
/// ## Errors
///
/// - `ConstraintViolation`: key collision, duplicate email or registration,
///   blank required field, or a reference to a missing row
/// - `NotFound`: update of a row that does not exist
/// - `InvalidInput`: malformed email or negative age
/// - `Persistence`: any other database failure
pub fn apply_engine_command_with_context(
    cmd: Command,
    conn: &Connection,
    ctx: &RequestContext,
) -> Result<EngineCommandResult> {
    let op = cmd.op_name();
    log_op_start!(
        op,
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str)
    );
    let start = std::time::Instant::now();

    let result = dispatch(cmd, conn).map_err(|e| {
        let e = match &ctx.trace_id {
            Some(trace_id) => e.with_trace_id(trace_id.clone()),
            None => e,
        }
        .with_request_id(ctx.request_id.clone());
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        e
    })?;

    match result.row_count() {
        Some(rows) => log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str(),
            row_count = rows as u64
        ),
        None => log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        ),
    }

    Ok(result)
}

fn dispatch(cmd: Command, conn: &Connection) -> Result<EngineCommandResult> {
    use EngineCommandResult as R;

    let result = match cmd {
        // Students
        Command::StudentCreate { student } => {
            SqliteRepo::insert_student(conn, &student)?;
            R::Done
        }
        Command::StudentUpdate { student } => {
            SqliteRepo::update_student(conn, &student)?;
            R::Done
        }
        Command::StudentDelete { student_id } => {
            R::Removed(SqliteRepo::delete_student(conn, &student_id)?)
        }
        Command::StudentGet { student_id } => R::Student(SqliteRepo::get_student(conn, &student_id)?),
        Command::StudentList => R::Students(SqliteRepo::list_students(conn)?),
        Command::StudentCourses { student_id } => {
            R::Courses(SqliteRepo::list_courses_for_student(conn, &student_id)?)
        }

        // Instructors
        Command::InstructorCreate { instructor } => {
            SqliteRepo::insert_instructor(conn, &instructor)?;
            R::Done
        }
        Command::InstructorUpdate { instructor } => {
            SqliteRepo::update_instructor(conn, &instructor)?;
            R::Done
        }
        Command::InstructorDelete { instructor_id } => {
            R::Removed(SqliteRepo::delete_instructor(conn, &instructor_id)?)
        }
        Command::InstructorGet { instructor_id } => {
            R::Instructor(SqliteRepo::get_instructor(conn, &instructor_id)?)
        }
        Command::InstructorList => R::Instructors(SqliteRepo::list_instructors(conn)?),
        Command::InstructorCourses { instructor_id } => {
            R::Courses(SqliteRepo::list_courses_for_instructor(conn, &instructor_id)?)
        }

        // Courses
        Command::CourseCreate { course } => {
            SqliteRepo::insert_course(conn, &course)?;
            R::Done
        }
        Command::CourseUpdate { course } => {
            SqliteRepo::update_course(conn, &course)?;
            R::Done
        }
        Command::CourseDelete { course_id } => {
            R::Removed(SqliteRepo::delete_course(conn, &course_id)?)
        }
        Command::CourseGet { course_id } => R::Course(SqliteRepo::get_course(conn, &course_id)?),
        Command::CourseList => R::Courses(SqliteRepo::list_courses(conn)?),
        Command::CourseStudents { course_id } => {
            R::Students(SqliteRepo::list_students_for_course(conn, &course_id)?)
        }

        // Registrations
        Command::RegistrationCreate {
            student_id,
            course_id,
        } => R::RegistrationCreated(SqliteRepo::insert_registration(
            conn,
            &student_id,
            &course_id,
        )?),
        Command::RegistrationUpdate {
            registration_id,
            student_id,
            course_id,
        } => {
            SqliteRepo::update_registration(conn, registration_id, &student_id, &course_id)?;
            R::Done
        }
        Command::RegistrationDelete { registration_id } => {
            R::Removed(SqliteRepo::delete_registration(conn, registration_id)?)
        }
        Command::RegistrationRemove {
            student_id,
            course_id,
        } => R::Removed(SqliteRepo::remove_registration(
            conn,
            &student_id,
            &course_id,
        )?),
        Command::RegistrationList => R::Registrations(SqliteRepo::list_registrations(conn)?),
        Command::RegistrationListForDisplay => {
            R::RegistrationViews(SqliteRepo::list_registrations_for_display(conn)?)
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_only_for_reads() {
        assert_eq!(EngineCommandResult::Done.row_count(), None);
        assert_eq!(EngineCommandResult::Removed(true).row_count(), None);
        assert_eq!(EngineCommandResult::Student(None).row_count(), Some(0));
        assert_eq!(
            EngineCommandResult::Students(vec![Student::new("S1", "Ada", "a@x.com")]).row_count(),
            Some(1)
        );
    }

    #[test]
    fn test_untagged_json_shape() {
        let json = serde_json_shape(&EngineCommandResult::RegistrationCreated(7));
        assert_eq!(json, "7");
        let json = serde_json_shape(&EngineCommandResult::Removed(false));
        assert_eq!(json, "false");
    }

    fn serde_json_shape(result: &EngineCommandResult) -> String {
        serde_json::to_string(result).unwrap()
    }
}
