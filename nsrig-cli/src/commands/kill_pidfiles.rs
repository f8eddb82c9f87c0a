//! Kill-pidfiles command implementation

use anyhow::Result;
use std::path::PathBuf;

pub fn execute(pidfiles: &[PathBuf]) -> Result<i32> {
    nsrig_process::pidfile::kill_all(pidfiles);

    // Best-effort cleanup always succeeds, whatever was skipped
    Ok(0)
}
