//! School CLI
//!
//! Command-line front-end for the school records store

use clap::{Parser, Subcommand};
use school_core::logging_facility::{self, Profile};
use school_store::db::{open_store, StoreOptions};
use std::path::PathBuf;

mod commands;

use commands::Session;

#[derive(Debug, Parser)]
#[command(name = "school")]
#[command(about = "School records - students, instructors, courses and registrations", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "SCHOOL_DB", default_value = "school.db")]
    db: PathBuf,

    /// Log output format (pretty or json)
    #[arg(long, global = true, env = "SCHOOL_LOG_FORMAT", default_value = "pretty")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Student records
    Student(commands::student::StudentArgs),
    /// Instructor records
    Instructor(commands::instructor::InstructorArgs),
    /// Courses and instructor assignment
    Course(commands::course::CourseArgs),
    /// Student registrations in courses
    Registration(commands::registration::RegistrationArgs),
    /// Write a timestamped copy of the database next to it
    Backup,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(&cli.db, StoreOptions::default())?;
    let session = Session::new(&conn);

    match cli.command {
        Commands::Student(args) => commands::student::execute(args, &session),
        Commands::Instructor(args) => commands::instructor::execute(args, &session),
        Commands::Course(args) => commands::course::execute(args, &session),
        Commands::Registration(args) => commands::registration::execute(args, &session),
        Commands::Backup => commands::backup::execute(&session),
    }
}
