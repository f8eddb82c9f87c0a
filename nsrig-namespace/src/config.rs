//! Namespace selection

use nix::sched::CloneFlags;
use serde::{Deserialize, Serialize};

/// Selection of namespace types to create
///
/// Built from caller-supplied tokens; consumed once to produce the clone
/// flag mask. An empty selection is a configuration error at launch time,
/// not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// New mount namespace
    pub mount: bool,

    /// New UTS namespace (hostname)
    pub uts: bool,

    /// New IPC namespace
    pub ipc: bool,

    /// New network namespace
    pub network: bool,

    /// New PID namespace
    pub pid: bool,

    /// New user namespace
    pub user: bool,
}

impl NamespaceConfig {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every supported namespace type
    #[must_use]
    pub const fn all() -> Self {
        Self {
            mount: true,
            uts: true,
            ipc: true,
            network: true,
            pid: true,
            user: true,
        }
    }

    /// Build a selection from textual type tokens
    ///
    /// Recognized tokens are `mnt`, `uts`, `ipc`, `net`, `pid` and `user`;
    /// anything else is ignored. Check [`Self::has_any`] afterwards to
    /// detect a selection where nothing matched.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut config = Self::new();

        for token in tokens {
            match token.as_ref() {
                "mnt" => config.mount = true,
                "uts" => config.uts = true,
                "ipc" => config.ipc = true,
                "net" => config.network = true,
                "pid" => config.pid = true,
                "user" => config.user = true,
                other => {
                    tracing::debug!(token = other, "ignoring unrecognized namespace type");
                }
            }
        }

        config
    }

    /// Enable mount namespace
    #[must_use]
    pub const fn with_mount(mut self, enable: bool) -> Self {
        self.mount = enable;
        self
    }

    /// Enable UTS namespace
    #[must_use]
    pub const fn with_uts(mut self, enable: bool) -> Self {
        self.uts = enable;
        self
    }

    /// Enable IPC namespace
    #[must_use]
    pub const fn with_ipc(mut self, enable: bool) -> Self {
        self.ipc = enable;
        self
    }

    /// Enable network namespace
    #[must_use]
    pub const fn with_network(mut self, enable: bool) -> Self {
        self.network = enable;
        self
    }

    /// Enable PID namespace
    #[must_use]
    pub const fn with_pid(mut self, enable: bool) -> Self {
        self.pid = enable;
        self
    }

    /// Enable user namespace
    #[must_use]
    pub const fn with_user(mut self, enable: bool) -> Self {
        self.user = enable;
        self
    }

    /// Convert to clone flags for clone(2)
    #[must_use]
    pub fn to_clone_flags(&self) -> CloneFlags {
        let mut flags = CloneFlags::empty();

        if self.mount {
            flags |= CloneFlags::CLONE_NEWNS;
        }
        if self.uts {
            flags |= CloneFlags::CLONE_NEWUTS;
        }
        if self.ipc {
            flags |= CloneFlags::CLONE_NEWIPC;
        }
        if self.network {
            flags |= CloneFlags::CLONE_NEWNET;
        }
        if self.pid {
            flags |= CloneFlags::CLONE_NEWPID;
        }
        if self.user {
            flags |= CloneFlags::CLONE_NEWUSER;
        }

        flags
    }

    /// Check if any namespace type is selected
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.mount || self.uts || self.ipc || self.network || self.pid || self.user
    }

    /// Get list of selected namespace type names
    #[must_use]
    pub fn enabled_namespaces(&self) -> Vec<&'static str> {
        let mut namespaces = Vec::new();

        if self.mount {
            namespaces.push("mnt");
        }
        if self.uts {
            namespaces.push("uts");
        }
        if self.ipc {
            namespaces.push("ipc");
        }
        if self.network {
            namespaces.push("net");
        }
        if self.pid {
            namespaces.push("pid");
        }
        if self.user {
            namespaces.push("user");
        }

        namespaces
    }
}
