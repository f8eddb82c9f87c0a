//! Wrap command implementation

use anyhow::Result;

pub fn execute(command: &[String]) -> Result<i32> {
    // Relay the child's translated exit status as our own
    let code = nsrig_process::wrap::run(command)?;

    Ok(code)
}
