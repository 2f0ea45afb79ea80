//! School Engine - orchestration layer
//!
//! Dispatches front-end commands to the store and owns their lifecycle
//! logging.

pub mod commands;

pub use commands::backup::backup;
pub use commands::engine_command::{
    apply_engine_command, apply_engine_command_with_context, EngineCommandResult,
};
