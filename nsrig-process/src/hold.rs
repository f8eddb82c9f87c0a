//! Pin a memory allocation and publish its address
//!
//! A cooperating process - often in another namespace - needs a stable
//! virtual address in this process to aim address-space-crossing operations
//! at. The allocation is published as one `0x<hex>` line, then the process
//! goes quiet: every descriptor is closed so no harness-owned pipe or
//! socket can signal false readiness or hold back a hangup, and the process
//! blocks until an external signal ends it.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use nsrig_core::{Error, Result, fd};

/// A zero-filled buffer pinned in memory for the process lifetime
#[derive(Debug)]
pub struct HeldBuffer {
    buf: Vec<u8>,
}

impl HeldBuffer {
    /// Allocate `size` bytes, failing cleanly when the reservation is
    /// refused rather than aborting
    pub fn allocate(size: usize) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(size).map_err(|_| Error::Allocation {
            message: format!("failed to allocate {size} bytes"),
        })?;
        buf.resize(size, 0);

        Ok(Self { buf })
    }

    /// Size of the held allocation
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the allocation is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The buffer's virtual address as a `0x<hex>` line body
    #[must_use]
    pub fn address_line(&self) -> String {
        format!("{:p}", self.buf.as_ptr())
    }
}

/// Write the address line to stdout or to `outfile`, flushed
///
/// A file target is created (or truncated), fsynced and closed before this
/// returns, so a reader polling the path sees the complete line before the
/// publishing process blocks.
pub fn publish(line: &str, outfile: Option<&Path>) -> Result<()> {
    match outfile {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{line}")?;
            file.sync_all()?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{line}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Close every descriptor, then suspend until a signal arrives
///
/// pause(2) only returns on a caught signal; terminating signals end the
/// process directly, which is the intended teardown path.
pub fn seal_and_wait() -> ! {
    fd::close_all();

    loop {
        nix::unistd::pause();
    }
}
