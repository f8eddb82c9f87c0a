//! Vm-hold command implementation

use anyhow::Result;
use std::path::Path;

use nsrig_process::HeldBuffer;
use nsrig_process::hold;

pub fn execute(size: usize, outfile: Option<&Path>) -> Result<i32> {
    let held = HeldBuffer::allocate(size)?;

    hold::publish(&held.address_line(), outfile)?;

    // No further observable behavior: descriptors close, then we block
    // until killed. The buffer stays live for the whole wait.
    hold::seal_and_wait()
}
