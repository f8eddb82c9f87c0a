//! Core type definitions with strong typing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process identifier
///
/// PIDs are namespace-relative: the same process is PID 1 inside a new PID
/// namespace while carrying a different id in the parent namespace. Values
/// of this type are always ids as seen from the namespace of the process
/// that obtained them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ProcessId(i32);

impl ProcessId {
    /// Create from raw PID
    #[must_use]
    pub const fn from_raw(pid: i32) -> Self {
        Self(pid)
    }

    /// Get the current process ID
    #[must_use]
    pub fn current() -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let pid = std::process::id() as i32;
        Self(pid)
    }

    /// Convert to `nix::unistd::Pid`
    #[must_use]
    pub const fn as_nix_pid(self) -> nix::unistd::Pid {
        nix::unistd::Pid::from_raw(self.0)
    }

    /// Get raw PID value
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Check whether a process with this id currently exists
    ///
    /// Uses the null-signal probe (`kill(pid, 0)`): EPERM still means the
    /// process exists, only ESRCH means it is gone.
    #[must_use]
    pub fn is_alive(self) -> bool {
        match nix::sys::signal::kill(self.as_nix_pid(), None) {
            Ok(()) => true,
            Err(errno) => errno != nix::errno::Errno::ESRCH,
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<nix::unistd::Pid> for ProcessId {
    fn from(pid: nix::unistd::Pid) -> Self {
        Self(pid.as_raw())
    }
}

impl From<ProcessId> for nix::unistd::Pid {
    fn from(pid: ProcessId) -> Self {
        nix::unistd::Pid::from_raw(pid.0)
    }
}
