//! Backup command handler with boundary logging.

use rusqlite::Connection;
use school_core::{log_op_end, log_op_error, log_op_start};
use school_core_types::{RequestContext, TraceId};
use school_store::errors::Result;
use std::path::PathBuf;

/// Write a timestamped backup next to the database file
///
/// ## Errors
///
/// - `InvalidInput`: the connection is in-memory
/// - `Io`: a backup with the same timestamp already exists
/// - `Persistence`: SQLite failed to write the copy
pub fn backup(conn: &Connection, ctx: &RequestContext) -> Result<PathBuf> {
    log_op_start!(
        "backup",
        request_id = ctx.request_id.as_str(),
        trace_id = ctx.trace_id.as_ref().map(TraceId::as_str)
    );
    let start = std::time::Instant::now();

    let path = school_store::backup::backup_database(conn).map_err(|e| {
        let e = e.with_request_id(ctx.request_id.clone());
        log_op_error!(
            "backup",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = ctx.request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "backup",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        path = %path.display()
    );
    Ok(path)
}
