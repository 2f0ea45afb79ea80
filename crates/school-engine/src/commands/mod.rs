//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging for every operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

pub mod backup;
pub mod engine_command;
