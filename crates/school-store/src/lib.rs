//! School Store - SQLite persistence for the school records store
//!
//! Provides:
//! - Connection management with foreign-key enforcement always on
//! - Embedded, checksummed schema migrations
//! - Repository layer for students, instructors, courses and registrations
//! - Timestamped database backups

pub mod backup;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

pub use db::StoreOptions;
pub use errors::Result;
pub use repo::SqliteRepo;
