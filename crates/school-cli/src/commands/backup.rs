//! Backup command
//!
//! Usage: school backup

use super::{CliResult, Session};

pub fn execute(session: &Session<'_>) -> CliResult {
    let path = session.backup()?;
    println!("Backup written to {}", path.display());
    Ok(())
}
