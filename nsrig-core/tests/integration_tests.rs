use nsrig_core::{Error, ProcessId, fd};

#[test]
fn test_process_id_public_api() {
    let me = ProcessId::current();
    assert!(me.as_raw() > 0);
    assert!(me.is_alive());
    assert_eq!(ProcessId::from_raw(me.as_raw()), me);
}

#[test]
fn test_nonexistent_pid_is_not_alive() {
    // PIDs just below the default pid_max are effectively never in use
    assert!(!ProcessId::from_raw(4_194_300).is_alive());
}

#[test]
fn test_descriptor_limit_is_sane() {
    let limit = fd::descriptor_limit();
    assert!(limit > 2);
}

#[test]
fn test_error_exit_status_classification() {
    let config = Error::InvalidConfig {
        message: "empty selection".to_string(),
    };
    let resource = Error::Allocation {
        message: "out of memory".to_string(),
    };

    assert!(config.is_config());
    assert!(!resource.is_config());
}

#[test]
fn test_nix_errors_convert() {
    let err: Error = nix::errno::Errno::EPERM.into();
    assert!(err.to_string().contains("System error"));
}
