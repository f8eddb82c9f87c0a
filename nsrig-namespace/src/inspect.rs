//! Namespace membership inspection via /proc
//!
//! Reads the `/proc/<pid>/ns/*` symlinks, whose targets name the namespace
//! a process belongs to (e.g. `pid:[4026531836]`). Comparing two processes'
//! links shows which namespaces separate them; a launched holder should
//! differ from its launcher in exactly the types that were requested.

use std::fs;

use nsrig_core::{ProcessId, Result};

/// Namespace type names as they appear under /proc/<pid>/ns
const NS_TYPES: [&str; 6] = ["mnt", "uts", "ipc", "net", "pid", "user"];

/// Namespace ids of one process, one entry per inspected type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceIds {
    /// Mount namespace id
    pub mnt: Option<String>,
    /// UTS namespace id
    pub uts: Option<String>,
    /// IPC namespace id
    pub ipc: Option<String>,
    /// Network namespace id
    pub net: Option<String>,
    /// PID namespace id
    pub pid: Option<String>,
    /// User namespace id
    pub user: Option<String>,
}

impl NamespaceIds {
    /// Namespace ids of the current process
    pub fn current() -> Result<Self> {
        Self::for_pid(ProcessId::current())
    }

    /// Namespace ids for a specific PID
    ///
    /// Individual links that cannot be read (no permission, or the process
    /// is gone) come back as `None` rather than failing the whole lookup.
    pub fn for_pid(pid: ProcessId) -> Result<Self> {
        let base_path = format!("/proc/{pid}/ns");

        let read_ns = |name: &str| -> Option<String> {
            fs::read_link(format!("{base_path}/{name}"))
                .map(|p| p.to_string_lossy().into_owned())
                .ok()
        };

        Ok(Self {
            mnt: read_ns("mnt"),
            uts: read_ns("uts"),
            ipc: read_ns("ipc"),
            net: read_ns("net"),
            pid: read_ns("pid"),
            user: read_ns("user"),
        })
    }

    /// Whether any namespace link was readable at all
    ///
    /// `false` usually means the process does not exist (or /proc access
    /// was denied across the board).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.mnt.is_some()
            || self.uts.is_some()
            || self.ipc.is_some()
            || self.net.is_some()
            || self.pid.is_some()
            || self.user.is_some()
    }

    /// Namespace types where both sides are readable and the ids differ
    #[must_use]
    pub fn differing_types(&self, other: &Self) -> Vec<&'static str> {
        let pairs = [
            (&self.mnt, &other.mnt),
            (&self.uts, &other.uts),
            (&self.ipc, &other.ipc),
            (&self.net, &other.net),
            (&self.pid, &other.pid),
            (&self.user, &other.user),
        ];

        NS_TYPES
            .iter()
            .zip(pairs)
            .filter_map(|(name, (a, b))| match (a, b) {
                (Some(a), Some(b)) if a != b => Some(*name),
                _ => None,
            })
            .collect()
    }

    fn entries(&self) -> [(&'static str, &Option<String>); 6] {
        [
            ("mnt", &self.mnt),
            ("uts", &self.uts),
            ("ipc", &self.ipc),
            ("net", &self.net),
            ("pid", &self.pid),
            ("user", &self.user),
        ]
    }
}

impl std::fmt::Display for NamespaceIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, id) in self.entries() {
            if let Some(id) = id {
                writeln!(f, "  {name:<5} {id}")?;
            }
        }
        Ok(())
    }
}
