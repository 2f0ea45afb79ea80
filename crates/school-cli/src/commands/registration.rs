//! Registration commands
//!
//! Usage: school registration add|list|update|delete|remove

use super::{print_json, print_removed, unexpected, CliResult, Session};
use clap::{Args, Subcommand};
use school_core::Command;
use school_engine::EngineCommandResult;

#[derive(Debug, Args)]
pub struct RegistrationArgs {
    #[command(subcommand)]
    pub command: RegistrationCommand,
}

#[derive(Debug, Subcommand)]
pub enum RegistrationCommand {
    /// Register a student in a course
    Add { student_id: String, course_id: String },
    /// List registrations with student and course names
    List {
        #[arg(long)]
        json: bool,
        /// List bare registration rows instead of the joined view
        #[arg(long)]
        raw: bool,
    },
    /// Point an existing registration at another student/course pair
    Update {
        registration_id: i64,
        student_id: String,
        course_id: String,
    },
    /// Delete a registration by id
    Delete { registration_id: i64 },
    /// Unregister a student from a course
    Remove { student_id: String, course_id: String },
}

pub fn execute(args: RegistrationArgs, session: &Session<'_>) -> CliResult {
    match args.command {
        RegistrationCommand::Add {
            student_id,
            course_id,
        } => match session.apply(Command::RegistrationCreate {
            student_id,
            course_id,
        })? {
            EngineCommandResult::RegistrationCreated(id) => {
                println!("Added registration {}", id);
                Ok(())
            }
            other => Err(unexpected(other)),
        },
        RegistrationCommand::List { json, raw: true } => {
            match session.apply(Command::RegistrationList)? {
                EngineCommandResult::Registrations(rows) if json => print_json(&rows),
                EngineCommandResult::Registrations(rows) => {
                    for r in rows {
                        println!("{}\t{}\t{}", r.registration_id, r.student_id, r.course_id);
                    }
                    Ok(())
                }
                other => Err(unexpected(other)),
            }
        }
        RegistrationCommand::List { json, raw: false } => {
            match session.apply(Command::RegistrationListForDisplay)? {
                EngineCommandResult::RegistrationViews(views) if json => print_json(&views),
                EngineCommandResult::RegistrationViews(views) => {
                    for v in views {
                        println!(
                            "{}\t{} ({})\t{} ({})",
                            v.registration_id,
                            v.student_name,
                            v.student_id,
                            v.course_name,
                            v.course_id
                        );
                    }
                    Ok(())
                }
                other => Err(unexpected(other)),
            }
        }
        RegistrationCommand::Update {
            registration_id,
            student_id,
            course_id,
        } => {
            session.apply(Command::RegistrationUpdate {
                registration_id,
                student_id,
                course_id,
            })?;
            println!("Updated registration {}", registration_id);
            Ok(())
        }
        RegistrationCommand::Delete { registration_id } => {
            match session.apply(Command::RegistrationDelete { registration_id })? {
                EngineCommandResult::Removed(removed) => {
                    print_removed(removed, &format!("registration {}", registration_id))
                }
                other => Err(unexpected(other)),
            }
        }
        RegistrationCommand::Remove {
            student_id,
            course_id,
        } => {
            let what = format!("registration of {} in {}", student_id, course_id);
            match session.apply(Command::RegistrationRemove {
                student_id,
                course_id,
            })? {
                EngineCommandResult::Removed(removed) => print_removed(removed, &what),
                other => Err(unexpected(other)),
            }
        }
    }
}
