//! Student commands
//!
//! Usage: school student add|list|show|update|delete|courses|export

use super::{
    print_courses, print_json, print_removed, print_students, unexpected, CliResult, Session,
};
use clap::{Args, Subcommand};
use school_core::errors::{RecordsError, SchoolError};
use school_core::{Command, Student};
use school_engine::EngineCommandResult;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: StudentCommand,
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Add a new student
    Add(StudentFields),
    /// List all students
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one student
    Show {
        student_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Replace name, age and email of a student
    Update(StudentFields),
    /// Delete a student and their registrations
    Delete { student_id: String },
    /// Courses the student is registered in
    Courses {
        student_id: String,
        #[arg(long)]
        json: bool,
    },
    /// Write every student to a CSV file
    Export {
        #[arg(long, default_value = "students.csv")]
        out: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct StudentFields {
    pub student_id: String,
    pub name: String,
    pub email: String,
    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i64>,
}

impl From<StudentFields> for Student {
    fn from(fields: StudentFields) -> Self {
        Student {
            student_id: fields.student_id,
            name: fields.name,
            age: fields.age,
            email: fields.email,
        }
    }
}

pub fn execute(args: StudentArgs, session: &Session<'_>) -> CliResult {
    match args.command {
        StudentCommand::Add(fields) => {
            let student = Student::from(fields);
            let id = student.student_id.clone();
            session.apply(Command::StudentCreate { student })?;
            println!("Added student {}", id);
            Ok(())
        }
        StudentCommand::List { json } => match session.apply(Command::StudentList)? {
            EngineCommandResult::Students(students) => print_students(&students, json),
            other => Err(unexpected(other)),
        },
        StudentCommand::Show { student_id, json } => {
            match session.apply(Command::StudentGet {
                student_id: student_id.clone(),
            })? {
                EngineCommandResult::Student(Some(student)) if json => print_json(&student),
                EngineCommandResult::Student(Some(student)) => {
                    print_students(std::slice::from_ref(&student), false)
                }
                EngineCommandResult::Student(None) => Err(
                    RecordsError::from(SchoolError::StudentNotFound { student_id })
                        .with_op("student_get")
                        .into(),
                ),
                other => Err(unexpected(other)),
            }
        }
        StudentCommand::Update(fields) => {
            let student = Student::from(fields);
            let id = student.student_id.clone();
            session.apply(Command::StudentUpdate { student })?;
            println!("Updated student {}", id);
            Ok(())
        }
        StudentCommand::Delete { student_id } => {
            let what = format!("student {}", student_id);
            match session.apply(Command::StudentDelete { student_id })? {
                EngineCommandResult::Removed(removed) => print_removed(removed, &what),
                other => Err(unexpected(other)),
            }
        }
        StudentCommand::Courses { student_id, json } => {
            match session.apply(Command::StudentCourses { student_id })? {
                EngineCommandResult::Courses(courses) => print_courses(&courses, json),
                other => Err(unexpected(other)),
            }
        }
        StudentCommand::Export { out } => match session.apply(Command::StudentList)? {
            EngineCommandResult::Students(students) => export_csv(&students, &out),
            other => Err(unexpected(other)),
        },
    }
}

/// Write `student_id,name,age,email` with a header row; an empty table writes nothing
fn export_csv(students: &[Student], out: &Path) -> CliResult {
    if students.is_empty() {
        println!("No students to export");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(out)?;
    for student in students {
        writer.serialize(student)?;
    }
    writer.flush()?;

    println!("Exported {} students to {}", students.len(), out.display());
    Ok(())
}
