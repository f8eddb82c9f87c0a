//! Namespace creation anchored by a holder process
//!
//! Namespace creation and process creation are the same primitive here:
//! clone(2) with `CLONE_NEW*` flags produces a child that is PID 1 of the
//! new PID namespace while being an ordinary, killable PID in the parent
//! namespace. That parent-visible PID is the only teardown handle there is,
//! so it must reach the caller before the launching process exits.
//!
//! `CLONE_PARENT` would keep the holder under our own parent instead of
//! being reparented to init, but it is incompatible with `CLONE_NEWPID`.

#![allow(unsafe_code)]

use nix::sched;
use tracing::{debug, info};

use nsrig_core::{Error, ProcessId, Result};

use crate::config::NamespaceConfig;
use crate::reaper;

/// Stack size for the cloned holder process
const HOLDER_STACK_SIZE: usize = 1024 * 1024;

/// Create the selected namespaces with a live holder process inside
///
/// The holder runs [`reaper::run`] as PID 1 of the new PID namespace (when
/// one is selected) and never exits on its own; killing the returned PID
/// ends it and with it the namespaces. When this returns, the namespaces
/// are fully established - callers may treat the returned PID as "ready".
///
/// An empty selection is a configuration error; nothing is created.
pub fn launch(config: &NamespaceConfig) -> Result<ProcessId> {
    if !config.has_any() {
        return Err(Error::InvalidConfig {
            message: "no recognized namespace types selected".to_string(),
        });
    }

    let flags = config.to_clone_flags();

    debug!(
        namespaces = ?config.enabled_namespaces(),
        "creating namespaces"
    );

    let mut stack = vec![0u8; HOLDER_STACK_SIZE];

    // SIGCHLD in the clone signal slot so the holder can be waited on by
    // its reparented-to parent like any forked child.
    let child = unsafe {
        sched::clone(
            Box::new(|| -> isize { reaper::run() }),
            &mut stack,
            flags,
            Some(libc::SIGCHLD),
        )
    }
    .map_err(|e| Error::Namespace {
        message: format!("clone failed: {e}"),
    })?;

    info!(pid = child.as_raw(), "namespace holder started");

    Ok(ProcessId::from(child))
}
