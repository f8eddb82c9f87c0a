use crate::cli::Commands;
use anyhow::Result;

pub mod drop_caps;
pub mod kill_pidfiles;
pub mod launch;
pub mod namespaces;
pub mod vm_hold;
pub mod wrap;

/// Dispatch command to appropriate handler; returns the process exit code
pub fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Launch { kinds } => launch::execute(&kinds),

        Commands::Wrap { command } => wrap::execute(&command),

        Commands::KillPidfiles { pidfiles } => kill_pidfiles::execute(&pidfiles),

        Commands::DropCaps { caps, command } => drop_caps::execute(&caps, &command),

        Commands::VmHold { size, outfile } => vm_hold::execute(size, outfile.as_deref()),

        Commands::Namespaces { pid } => namespaces::execute(pid),
    }
}
