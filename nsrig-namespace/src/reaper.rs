//! PID-1 reaping loop for namespace holder processes
//!
//! The first process of a new PID namespace inherits init's job: every
//! orphaned process in the namespace is reparented to it, and anything it
//! fails to wait on stays a zombie until the namespace dies. The loop here
//! alternates between two states: draining (collect every already-exited
//! child without blocking) and waiting (suspended until SIGCHLD).

use nix::sys::signal::{SigSet, Signal};
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};

use nsrig_core::fd;

/// Run the reaping loop; never returns
///
/// Closes every inherited descriptor first so nothing the launcher held
/// (pipes, sockets, terminals) leaks into the namespace. Termination comes
/// only from outside, via a signal to the PID the launcher reported.
pub fn run() -> ! {
    fd::close_all();

    let mut wake = SigSet::empty();
    wake.add(Signal::SIGCHLD);

    // Block SIGCHLD before the first drain: a child exiting between a drain
    // pass and the wait would otherwise be missed until the next wake.
    let _ = wake.thread_block();

    loop {
        drain();

        // Suspend until a child-termination signal is pending. Any wake,
        // spurious or not, just leads back into a drain pass.
        if wake.wait().is_err() {
            nix::unistd::pause();
        }
    }
}

/// Collect every child whose status is already available, discarding it
fn drain() {
    loop {
        match waitpid(None, Some(WaitPidFlag::WNOHANG)) {
            // Children remain but none has terminated yet
            Ok(WaitStatus::StillAlive) => break,
            // Reaped one; there may be more
            Ok(_) => {}
            // ECHILD: nothing left to wait for
            Err(_) => break,
        }
    }
}
