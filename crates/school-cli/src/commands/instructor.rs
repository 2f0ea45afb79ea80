//! Instructor commands
//!
//! Usage: school instructor add|list|show|update|delete|courses

use super::{
    print_courses, print_instructors, print_json, print_removed, unexpected, CliResult, Session,
};
use clap::{Args, Subcommand};
use school_core::errors::{RecordsError, SchoolError};
use school_core::{Command, Instructor};
use school_engine::EngineCommandResult;

#[derive(Debug, Args)]
pub struct InstructorArgs {
    #[command(subcommand)]
    pub command: InstructorCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstructorCommand {
    /// Add a new instructor
    Add(InstructorFields),
    /// List all instructors
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one instructor
    Show {
        instructor_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Replace name, age and email of an instructor
    Update(InstructorFields),
    /// Delete an instructor; their courses become unassigned
    Delete { instructor_id: String },
    /// Courses assigned to the instructor
    Courses {
        instructor_id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct InstructorFields {
    pub instructor_id: String,
    pub name: String,
    pub email: String,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,
}

impl From<InstructorFields> for Instructor {
    fn from(fields: InstructorFields) -> Self {
        Instructor {
            instructor_id: fields.instructor_id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
        }
    }
}

pub fn execute(args: InstructorArgs, session: &Session<'_>) -> CliResult {
    match args.command {
        InstructorCommand::Add(fields) => {
            let instructor = Instructor::from(fields);
            let id = instructor.instructor_id.clone();
            session.apply(Command::InstructorCreate { instructor })?;
            println!("Added instructor {}", id);
            Ok(())
        }
        InstructorCommand::List { json } => match session.apply(Command::InstructorList)? {
            EngineCommandResult::Instructors(instructors) => print_instructors(&instructors, json),
            other => Err(unexpected(other)),
        },
        InstructorCommand::Show {
            instructor_id,
            json,
        } => match session.apply(Command::InstructorGet {
            instructor_id: instructor_id.clone(),
        })? {
            EngineCommandResult::Instructor(Some(instructor)) if json => print_json(&instructor),
            EngineCommandResult::Instructor(Some(instructor)) => {
                print_instructors(std::slice::from_ref(&instructor), false)
            }
            EngineCommandResult::Instructor(None) => Err(
                RecordsError::from(SchoolError::InstructorNotFound { instructor_id })
                    .with_op("instructor_get")
                    .into(),
            ),
            other => Err(unexpected(other)),
        },
        InstructorCommand::Update(fields) => {
            let instructor = Instructor::from(fields);
            let id = instructor.instructor_id.clone();
            session.apply(Command::InstructorUpdate { instructor })?;
            println!("Updated instructor {}", id);
            Ok(())
        }
        InstructorCommand::Delete { instructor_id } => {
            let what = format!("instructor {}", instructor_id);
            match session.apply(Command::InstructorDelete { instructor_id })? {
                EngineCommandResult::Removed(removed) => print_removed(removed, &what),
                other => Err(unexpected(other)),
            }
        }
        InstructorCommand::Courses {
            instructor_id,
            json,
        } => match session.apply(Command::InstructorCourses { instructor_id })? {
            EngineCommandResult::Courses(courses) => print_courses(&courses, json),
            other => Err(unexpected(other)),
        },
    }
}
