//! Capability name resolution and bounding-set drops
//!
//! Name resolution mirrors cap_from_name(3): names are matched
//! case-insensitively, with or without the `CAP_` prefix. The drop itself
//! goes through prctl(2) directly - nix has no wrapper for
//! `PR_CAPBSET_DROP`.

use std::ffi::CString;
use std::fmt;
use std::str::FromStr;

use nix::unistd::execvp;
use tracing::debug;

use nsrig_core::{Error, Result};

/// Capability names in kernel numbering order, as in linux/capability.h
const CAP_NAMES: [&str; 41] = [
    "chown",
    "dac_override",
    "dac_read_search",
    "fowner",
    "fsetid",
    "kill",
    "setgid",
    "setuid",
    "setpcap",
    "linux_immutable",
    "net_bind_service",
    "net_broadcast",
    "net_admin",
    "net_raw",
    "ipc_lock",
    "ipc_owner",
    "sys_module",
    "sys_rawio",
    "sys_chroot",
    "sys_ptrace",
    "sys_pacct",
    "sys_admin",
    "sys_boot",
    "sys_nice",
    "sys_resource",
    "sys_time",
    "sys_tty_config",
    "mknod",
    "lease",
    "audit_write",
    "audit_control",
    "setfcap",
    "mac_override",
    "mac_admin",
    "syslog",
    "wake_alarm",
    "block_suspend",
    "audit_read",
    "perfmon",
    "bpf",
    "checkpoint_restore",
];

/// A single capability, identified by its kernel number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capability(u32);

impl Capability {
    /// Kernel capability number
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Canonical lowercase name without the `cap_` prefix
    #[must_use]
    pub fn name(self) -> &'static str {
        CAP_NAMES[self.0 as usize]
    }

    /// Remove this capability from the calling process's bounding set
    ///
    /// Requires `CAP_SETPCAP`. Irreversible for this process and every
    /// descendant, including across privileged re-exec.
    pub fn drop_from_bounding_set(self) -> Result<()> {
        // Use libc directly since nix doesn't expose PR_CAPBSET_DROP
        let ret =
            unsafe { libc::prctl(libc::PR_CAPBSET_DROP, libc::c_ulong::from(self.0), 0, 0, 0) };

        if ret == -1 {
            return Err(Error::Capability {
                message: format!(
                    "failed to drop {} from bounding set: {}",
                    self.name(),
                    std::io::Error::last_os_error()
                ),
            });
        }

        debug!(capability = self.name(), "dropped from bounding set");
        Ok(())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("cap_").unwrap_or(&lower);

        CAP_NAMES
            .iter()
            .position(|name| *name == bare)
            .map(|idx| {
                #[allow(clippy::cast_possible_truncation)]
                let number = idx as u32;
                Self(number)
            })
            .ok_or_else(|| Error::Capability {
                message: format!("unknown capability name: {s}"),
            })
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cap_{}", self.name())
    }
}

/// Parse a comma-separated capability list and drop every entry from the
/// bounding set
///
/// Fails on the first name that does not resolve or refuses to drop;
/// entries before the failing one are already gone at that point, which
/// callers treat as fatal anyway.
pub fn drop_bounding_set(list: &str) -> Result<()> {
    for name in list.split(',') {
        let cap: Capability = name.parse()?;
        cap.drop_from_bounding_set()?;
    }

    Ok(())
}

/// Drop the listed capabilities, then replace this process with `command`
///
/// Nothing is executed unless every drop succeeded. Returns only on
/// failure; on success the process image is gone.
pub fn exec_with_reduced_caps(list: &str, command: &[String]) -> Result<()> {
    if command.is_empty() {
        return Err(Error::InvalidConfig {
            message: "no command given".to_string(),
        });
    }

    drop_bounding_set(list)?;

    let argv: Vec<CString> = command
        .iter()
        .map(|arg| CString::new(arg.as_bytes()))
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| Error::InvalidConfig {
            message: "command contains an interior NUL byte".to_string(),
        })?;

    // Only returns on failure
    execvp(&argv[0], &argv).map_err(|e| Error::Process {
        message: format!("failed to execute {}: {e}", command[0]),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_name() {
        let cap: Capability = "chown".parse().unwrap();
        assert_eq!(cap.number(), 0);
    }

    #[test]
    fn test_resolve_with_prefix_and_case() {
        let cap: Capability = "CAP_NET_RAW".parse().unwrap();
        assert_eq!(cap.number(), 13);
        assert_eq!(cap.name(), "net_raw");
    }

    #[test]
    fn test_resolution_matches_kernel_numbers() {
        let sys_admin: Capability = "sys_admin".parse().unwrap();
        assert_eq!(u64::from(sys_admin.number()), u64::from(libc::CAP_SYS_ADMIN));

        let setpcap: Capability = "setpcap".parse().unwrap();
        assert_eq!(u64::from(setpcap.number()), u64::from(libc::CAP_SETPCAP));

        let bpf: Capability = "bpf".parse().unwrap();
        assert_eq!(u64::from(bpf.number()), u64::from(libc::CAP_BPF));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = "no_such_capability".parse::<Capability>().unwrap_err();
        assert!(err.to_string().contains("no_such_capability"));
    }

    #[test]
    fn test_drop_list_fails_fast_on_unknown_name() {
        let err = drop_bounding_set("bogus_cap_name,chown").unwrap_err();
        assert!(err.to_string().contains("bogus_cap_name"));
    }

    #[test]
    fn test_exec_requires_a_command() {
        let err = exec_with_reduced_caps("chown", &[]).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_display_uses_canonical_prefix() {
        let cap: Capability = "Net_Admin".parse().unwrap();
        assert_eq!(cap.to_string(), "cap_net_admin");
    }
}
