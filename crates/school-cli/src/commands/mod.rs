pub mod backup;
pub mod course;
pub mod instructor;
pub mod registration;
pub mod student;

use rusqlite::Connection;
use school_core::errors::{ErrorKind, RecordsError};
use school_core::{Command, Course, Instructor, Student};
use school_core_types::{RequestContext, TraceId};
use school_engine::{apply_engine_command_with_context, EngineCommandResult};
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// One CLI invocation: the open store plus the context every command runs under
pub struct Session<'a> {
    conn: &'a Connection,
    ctx: RequestContext,
}

impl<'a> Session<'a> {
    /// Start a session with its own trace id
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            ctx: RequestContext::new().with_trace_id(TraceId::new()),
        }
    }

    pub fn apply(&self, cmd: Command) -> school_store::Result<EngineCommandResult> {
        apply_engine_command_with_context(cmd, self.conn, &self.ctx)
    }

    pub fn backup(&self) -> school_store::Result<std::path::PathBuf> {
        school_engine::backup(self.conn, &self.ctx)
    }
}

/// Error for an engine result that does not match the command issued
pub fn unexpected(result: EngineCommandResult) -> Box<dyn std::error::Error> {
    Box::new(
        RecordsError::new(ErrorKind::Internal)
            .with_op("cli")
            .with_message(format!("unexpected engine result: {:?}", result)),
    )
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn age_text(age: Option<i64>) -> String {
    age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn print_students(students: &[Student], json: bool) -> CliResult {
    if json {
        return print_json(students);
    }
    for s in students {
        println!("{}\t{}\t{}\t{}", s.student_id, s.name, age_text(s.age), s.email);
    }
    Ok(())
}

pub fn print_instructors(instructors: &[Instructor], json: bool) -> CliResult {
    if json {
        return print_json(instructors);
    }
    for i in instructors {
        println!(
            "{}\t{}\t{}\t{}",
            i.instructor_id,
            i.name,
            age_text(i.age),
            i.email
        );
    }
    Ok(())
}

pub fn print_courses(courses: &[Course], json: bool) -> CliResult {
    if json {
        return print_json(courses);
    }
    for c in courses {
        println!(
            "{}\t{}\t{}",
            c.course_id,
            c.course_name,
            c.instructor_id.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Report the outcome of a delete; a missing row is not an error
pub fn print_removed(removed: bool, what: &str) -> CliResult {
    if removed {
        println!("Deleted {}", what);
    } else {
        println!("No {} to delete", what);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_result_is_internal() {
        let err = unexpected(EngineCommandResult::Done);
        assert!(err.to_string().starts_with("[ERR_INTERNAL]"));
    }

    #[test]
    fn test_session_carries_trace_id() {
        let conn = school_store::db::open_store_in_memory().unwrap();
        let session = Session::new(&conn);
        assert!(session.ctx.trace_id.is_some());
    }
}
