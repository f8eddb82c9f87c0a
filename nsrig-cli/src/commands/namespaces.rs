//! Namespaces command implementation

use anyhow::Result;
use nsrig_core::ProcessId;
use nsrig_namespace::NamespaceIds;

pub fn execute(pid: Option<i32>) -> Result<i32> {
    let target = pid.map_or_else(ProcessId::current, ProcessId::from_raw);

    let ids = NamespaceIds::for_pid(target)?;
    if !ids.is_visible() {
        anyhow::bail!("no such process: {target}");
    }

    println!("namespaces of {target}:");
    print!("{ids}");

    if target != ProcessId::current() {
        let mine = NamespaceIds::current()?;
        let differing = ids.differing_types(&mine);

        if differing.is_empty() {
            println!("isolation: none (same namespaces as caller)");
        } else {
            println!("isolation: {}", differing.join(", "));
        }
    }

    Ok(0)
}
