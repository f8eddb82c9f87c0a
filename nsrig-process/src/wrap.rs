//! Run a command as a forked child and relay its exit status
//!
//! Entering a PID namespace with setns(2)-style joins does not move the
//! joining process itself; only children forked afterwards land in the new
//! namespace, as its PID 1. This module supplies that missing fork: the
//! wrapping process keeps its pre-join PID in the old namespace, the child
//! execs the payload in place, and the wrapper's own exit status mirrors
//! the child's.
//!
//! This module uses `unsafe` for fork() which is inherently unsafe
//! but necessary here.

#![allow(unsafe_code)]

use nix::errno::Errno;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, execvp, fork};
use std::ffi::CString;
use tracing::debug;

use nsrig_core::{Error, Result};

/// Fork once, exec `command` in the child, and wait for it
///
/// Returns the child's exit code; death by signal is translated to the
/// conventional `128 + signo`. The child's status is relayed unchanged in
/// meaning - never reinterpreted. fork or wait failure is an error.
pub fn run(command: &[String]) -> Result<i32> {
    if command.is_empty() {
        return Err(Error::InvalidConfig {
            message: "no command given".to_string(),
        });
    }

    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => {
            debug!(pid = child.as_raw(), "waiting for wrapped command");
            wait_for(child)
        }
        Ok(ForkResult::Child) => {
            // Never returns: execs or exits
            exec_child(command)
        }
        Err(e) => Err(Error::Process {
            message: format!("fork failed: {e}"),
        }),
    }
}

/// Block until the one child terminates and translate its wait status
fn wait_for(child: Pid) -> Result<i32> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(128 + signal as i32),
            // Stopped/continued: not a termination, keep waiting
            Ok(_) => {}
            Err(Errno::EINTR) => {}
            Err(e) => {
                return Err(Error::Process {
                    message: format!("wait failed: {e}"),
                });
            }
        }
    }
}

/// Child side: replace this process image with the command
fn exec_child(command: &[String]) -> ! {
    let argv: Vec<CString> = match command
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect()
    {
        Ok(v) => v,
        Err(_) => {
            eprintln!("nsrig: command contains an interior NUL byte");
            unsafe { libc::_exit(127) }
        }
    };

    // Only returns on failure
    let _ = execvp(&argv[0], &argv);

    eprintln!(
        "nsrig: failed to execute {}: {}",
        command[0],
        std::io::Error::last_os_error()
    );
    unsafe { libc::_exit(127) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_command_is_rejected() {
        let err = run(&[]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_exit_status_zero() {
        let code = run(&args(&["/bin/sh", "-c", "exit 0"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_exit_status_passthrough() {
        let code = run(&args(&["/bin/sh", "-c", "exit 37"])).unwrap();
        assert_eq!(code, 37);
    }

    #[test]
    fn test_signal_death_maps_to_128_plus_signo() {
        // SIGTERM is 15
        let code = run(&args(&["/bin/sh", "-c", "kill -TERM $$"])).unwrap();
        assert_eq!(code, 143);
    }

    #[test]
    fn test_exec_failure_reports_127() {
        let code = run(&args(&["/nonexistent/nsrig-no-such-binary"])).unwrap();
        assert_eq!(code, 127);
    }
}
