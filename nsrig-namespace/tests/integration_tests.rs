use std::time::{Duration, Instant};

use nsrig_core::ProcessId;
use nsrig_namespace::{NamespaceConfig, NamespaceIds, launch};

/// Check if running as root
fn is_root() -> bool {
    unsafe { libc::getuid() == 0 }
}

fn kill_and_await_exit(pid: ProcessId) {
    unsafe {
        libc::kill(pid.as_raw(), libc::SIGKILL);
    }

    let deadline = Instant::now() + Duration::from_secs(10);
    while pid.is_alive() {
        assert!(
            Instant::now() < deadline,
            "holder {pid} survived SIGKILL teardown"
        );
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_config_from_tokens_public_api() {
    let config = NamespaceConfig::from_tokens(&["pid", "uts", "junk"]);
    assert!(config.has_any());
    assert_eq!(config.enabled_namespaces(), vec!["uts", "pid"]);
}

#[test]
fn test_launch_rejects_empty_selection() {
    let err = launch(&NamespaceConfig::new()).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_current_namespace_ids_readable() {
    let ids = NamespaceIds::current().unwrap();
    assert!(ids.is_visible());
    assert!(ids.pid.is_some());
    assert!(ids.net.is_some());
}

#[test]
#[ignore] // Requires root
fn test_launch_single_namespace_types() {
    if !is_root() {
        return;
    }

    for tokens in [["ipc"], ["uts"], ["net"], ["pid"]] {
        let config = NamespaceConfig::from_tokens(&tokens);
        let pid = launch(&config).unwrap();
        assert!(pid.as_raw() > 1);
        assert!(pid.is_alive());

        kill_and_await_exit(pid);
    }
}

#[test]
#[ignore] // Requires root
fn test_launched_holder_lives_in_requested_namespaces() {
    if !is_root() {
        return;
    }

    let config = NamespaceConfig::from_tokens(&["pid", "net", "ipc"]);
    let pid = launch(&config).unwrap();

    let holder = NamespaceIds::for_pid(pid).unwrap();
    let mine = NamespaceIds::current().unwrap();

    let differing = holder.differing_types(&mine);
    assert!(differing.contains(&"pid"), "differing: {differing:?}");
    assert!(differing.contains(&"net"), "differing: {differing:?}");
    assert!(differing.contains(&"ipc"), "differing: {differing:?}");
    assert!(!differing.contains(&"uts"), "differing: {differing:?}");

    kill_and_await_exit(pid);
}

#[test]
#[ignore] // Requires root
fn test_teardown_is_final() {
    if !is_root() {
        return;
    }

    let config = NamespaceConfig::from_tokens(&["pid"]);
    let pid = launch(&config).unwrap();
    kill_and_await_exit(pid);

    assert!(!NamespaceIds::for_pid(pid).unwrap().is_visible());
}
