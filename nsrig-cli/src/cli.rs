//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nsrig")]
#[command(about = "Namespace process rig for test harnesses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create namespaces kept alive by a PID-1 holder process
    ///
    /// Prints the holder's PID as seen from this namespace; kill that PID
    /// to tear the namespaces down.
    Launch {
        /// Namespace types to create (mnt, uts, ipc, net, pid, user)
        #[arg(required = true)]
        kinds: Vec<String>,
    },

    /// Run a command as a forked child and exit with its status
    Wrap {
        /// Command to run
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// SIGKILL the processes named by pidfiles, best-effort
    KillPidfiles {
        /// Pidfile paths; missing or malformed files are skipped
        #[arg(required = true)]
        pidfiles: Vec<PathBuf>,
    },

    /// Drop capabilities from the bounding set, then exec a command
    DropCaps {
        /// Comma-separated capability names (e.g. net_raw,sys_admin)
        caps: String,

        /// Command to exec after the drop
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Allocate a buffer, print its address, and block until signaled
    VmHold {
        /// Buffer size in bytes
        size: usize,

        /// Write the address line here instead of stdout
        outfile: Option<PathBuf>,
    },

    /// Show namespace membership of a process
    Namespaces {
        /// Process ID (default: current process)
        #[arg(short, long)]
        pid: Option<i32>,
    },
}
