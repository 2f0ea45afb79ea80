//! Repository layer for the four school tables
//!
//! `SqliteRepo` is split by entity across the submodules. Every write
//! validates its input first, then lets SQLite enforce keys, uniqueness and
//! references.

mod courses;
mod instructors;
mod registrations;
mod students;

/// SQLite repository for students, instructors, courses and registrations
pub struct SqliteRepo;
