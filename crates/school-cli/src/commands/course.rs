//! Course commands
//!
//! Usage: school course add|list|show|update|delete|students

use super::{
    print_courses, print_json, print_removed, print_students, unexpected, CliResult, Session,
};
use clap::{Args, Subcommand};
use school_core::errors::{RecordsError, SchoolError};
use school_core::{Command, Course};
use school_engine::EngineCommandResult;

#[derive(Debug, Args)]
pub struct CourseArgs {
    #[command(subcommand)]
    pub command: CourseCommand,
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// Add a new course
    Add(CourseFields),
    /// List all courses
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one course
    Show {
        course_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Replace the name and instructor of a course (omit --instructor to unassign)
    Update(CourseFields),
    /// Delete a course and its registrations
    Delete { course_id: String },
    /// Students registered in the course
    Students {
        course_id: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct CourseFields {
    pub course_id: String,
    pub course_name: String,
    /// Instructor teaching the course
    #[arg(long)]
    pub instructor: Option<String>,
}

impl From<CourseFields> for Course {
    fn from(fields: CourseFields) -> Self {
        Course {
            course_id: fields.course_id,
            course_name: fields.course_name,
            instructor_id: fields.instructor,
        }
    }
}

pub fn execute(args: CourseArgs, session: &Session<'_>) -> CliResult {
    match args.command {
        CourseCommand::Add(fields) => {
            let course = Course::from(fields);
            let id = course.course_id.clone();
            session.apply(Command::CourseCreate { course })?;
            println!("Added course {}", id);
            Ok(())
        }
        CourseCommand::List { json } => match session.apply(Command::CourseList)? {
            EngineCommandResult::Courses(courses) => print_courses(&courses, json),
            other => Err(unexpected(other)),
        },
        CourseCommand::Show { course_id, json } => match session.apply(Command::CourseGet {
            course_id: course_id.clone(),
        })? {
            EngineCommandResult::Course(Some(course)) if json => print_json(&course),
            EngineCommandResult::Course(Some(course)) => {
                print_courses(std::slice::from_ref(&course), false)
            }
            EngineCommandResult::Course(None) => Err(
                RecordsError::from(SchoolError::CourseNotFound { course_id })
                    .with_op("course_get")
                    .into(),
            ),
            other => Err(unexpected(other)),
        },
        CourseCommand::Update(fields) => {
            let course = Course::from(fields);
            let id = course.course_id.clone();
            session.apply(Command::CourseUpdate { course })?;
            println!("Updated course {}", id);
            Ok(())
        }
        CourseCommand::Delete { course_id } => {
            let what = format!("course {}", course_id);
            match session.apply(Command::CourseDelete { course_id })? {
                EngineCommandResult::Removed(removed) => print_removed(removed, &what),
                other => Err(unexpected(other)),
            }
        }
        CourseCommand::Students { course_id, json } => {
            match session.apply(Command::CourseStudents { course_id })? {
                EngineCommandResult::Students(students) => print_students(&students, json),
                other => Err(unexpected(other)),
            }
        }
    }
}
