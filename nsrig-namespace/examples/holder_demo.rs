//! Namespace holder demonstration
//!
//! Run with: cargo run --example holder_demo
//! Run as root to see an actual holder launched and torn down.

use nsrig_namespace::{NamespaceConfig, NamespaceIds, launch};

/// Check if running as root
fn is_root() -> bool {
    unsafe { libc::getuid() == 0 }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("Current process namespaces:");
    match NamespaceIds::current() {
        Ok(ids) => print!("{ids}"),
        Err(e) => println!("  failed to read: {e}"),
    }

    let config = NamespaceConfig::from_tokens(&["pid", "net", "bogus"]);
    println!("\nSelection from tokens [pid, net, bogus]: {:?}", config.enabled_namespaces());

    if !is_root() {
        println!("\nRun as root to launch a holder process");
        return;
    }

    match launch(&config) {
        Ok(pid) => {
            println!("\nHolder started with outer PID {pid}");

            match NamespaceIds::for_pid(pid) {
                Ok(ids) => print!("{ids}"),
                Err(e) => println!("  failed to read holder namespaces: {e}"),
            }

            println!("Tearing down via SIGKILL");
            unsafe {
                libc::kill(pid.as_raw(), libc::SIGKILL);
            }

            while pid.is_alive() {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            println!("Holder is gone");
        }
        Err(e) => println!("\nLaunch failed: {e}"),
    }
}
