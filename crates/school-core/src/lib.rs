//! School Core - domain kernel for the school records store
//!
//! This crate provides the pieces every other layer shares:
//! - Student, Instructor, Course and Registration models
//! - Field validation rules applied before anything reaches SQLite
//! - The command inventory issued by front-ends
//! - The structured error facility (`RecordsError`, `ErrorKind`)
//! - The structured logging facility and its macros

pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the logging macros so callers don't need a direct dependency.
pub use school_core_types as core_types;

pub use commands::Command;
pub use errors::{ErrorKind, RecordsError, Result, SchoolError};
pub use model::{Course, Instructor, Registration, RegistrationView, Student};
