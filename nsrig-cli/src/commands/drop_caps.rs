//! Drop-caps command implementation

use anyhow::Result;

pub fn execute(caps: &str, command: &[String]) -> Result<i32> {
    nsrig_security::exec_with_reduced_caps(caps, command)?;

    unreachable!("exec returned without an error");
}
