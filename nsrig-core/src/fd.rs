//! File-descriptor table utilities
//!
//! Processes that outlive their parent inside a namespace must not keep the
//! parent's descriptors open: a leaked pipe or socket can signal false
//! readiness to a cooperating process, or hold a hangup back indefinitely.

/// Upper bound of the process file-descriptor table
///
/// Reads `sysconf(_SC_OPEN_MAX)`; falls back to a conventional 1024 if the
/// limit is unavailable.
#[must_use]
pub fn descriptor_limit() -> i32 {
    // Use libc directly since nix doesn't expose sysconf(_SC_OPEN_MAX)
    let max = unsafe { libc::sysconf(libc::_SC_OPEN_MAX) };
    if max > 0 {
        max.try_into().unwrap_or(i32::MAX)
    } else {
        1024
    }
}

/// Close every descriptor from 0 up to the descriptor limit
///
/// Errors (including closing a descriptor that was never open) are ignored;
/// after this returns the process holds no open descriptors at all,
/// stdin/stdout/stderr included.
pub fn close_all() {
    for fd in 0..descriptor_limit() {
        unsafe {
            libc::close(fd);
        }
    }
}
