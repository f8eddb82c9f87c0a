//! Best-effort termination of processes named by pidfiles
//!
//! A pidfile holds the decimal textual PID of some process that registered
//! itself out-of-band. Teardown must tolerate every way such a file can be
//! stale: missing, unreadable, empty, garbage, or naming a process that
//! already exited. None of those is a failure - the goal is cleanup, not
//! verified termination.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use nix::sys::signal::{Signal, kill};
use tracing::debug;

use nsrig_core::ProcessId;

/// Enough for extremely large pid_max values
const PID_BUFFER_LEN: usize = 32;

/// Read each pidfile and SIGKILL the PID it names
///
/// Files are processed independently and in no guaranteed order; a skipped
/// or failed entry never affects the others. Always succeeds.
pub fn kill_all<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        kill_one(path.as_ref());
    }
}

fn kill_one(path: &Path) {
    let Some(pid) = read_pid(path) else {
        debug!(path = %path.display(), "skipping pidfile");
        return;
    };

    debug!(path = %path.display(), pid = pid.as_raw(), "killing pidfile target");

    // Delivery errors are expected: the target may already be gone
    let _ = kill(pid.as_nix_pid(), Signal::SIGKILL);
}

/// Extract the PID a pidfile names, if it names one
///
/// Reads at most a small fixed number of bytes and parses the leading
/// decimal integer. Missing file, read failure and non-positive or
/// non-numeric content all yield `None`.
#[must_use]
pub fn read_pid(path: &Path) -> Option<ProcessId> {
    let mut file = File::open(path).ok()?;
    let mut buf = [0u8; PID_BUFFER_LEN];
    let len = file.read(&mut buf).ok()?;

    parse_leading_pid(&buf[..len])
}

/// Parse a leading decimal integer the way atoi(3) would, keeping only
/// strictly positive results
fn parse_leading_pid(bytes: &[u8]) -> Option<ProcessId> {
    let trimmed = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .map_or(&[][..], |start| &bytes[start..]);

    let digits_len = trimmed
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(trimmed.len());

    let digits = std::str::from_utf8(&trimmed[..digits_len]).ok()?;
    let pid: i32 = digits.parse().ok()?;

    (pid > 0).then(|| ProcessId::from_raw(pid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::process::ExitStatusExt;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: &[u8]) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("nsrig-pidfile-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_parse_plain_pid() {
        let pid = parse_leading_pid(b"12345\n").unwrap();
        assert_eq!(pid.as_raw(), 12345);
    }

    #[test]
    fn test_parse_tolerates_leading_whitespace() {
        let pid = parse_leading_pid(b"  42").unwrap();
        assert_eq!(pid.as_raw(), 42);
    }

    #[test]
    fn test_parse_stops_at_first_non_digit() {
        let pid = parse_leading_pid(b"99 extra").unwrap();
        assert_eq!(pid.as_raw(), 99);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_leading_pid(b"").is_none());
        assert!(parse_leading_pid(b"pid").is_none());
        assert!(parse_leading_pid(b"-5").is_none());
        assert!(parse_leading_pid(b"0").is_none());
    }

    #[test]
    fn test_read_pid_missing_file() {
        assert!(read_pid(Path::new("/nonexistent/nsrig-no-such-pidfile")).is_none());
    }

    #[test]
    fn test_read_pid_from_file() {
        let path = scratch_file("valid", b"31337\n");
        let pid = read_pid(&path).unwrap();
        assert_eq!(pid.as_raw(), 31337);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_kill_all_terminates_live_target_and_skips_the_rest() {
        let mut child = std::process::Command::new("/bin/sleep")
            .arg("30")
            .spawn()
            .unwrap();

        let live = scratch_file("live", format!("{}\n", child.id()).as_bytes());
        let garbage = scratch_file("garbage", b"not a pid\n");
        let missing = PathBuf::from("/nonexistent/nsrig-missing-pidfile");

        kill_all(&[live.clone(), garbage.clone(), missing]);

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(libc::SIGKILL));

        let _ = std::fs::remove_file(&live);
        let _ = std::fs::remove_file(&garbage);
    }

    #[test]
    fn test_kill_all_tolerates_stale_pid() {
        // Spawn and fully collect a process, then feed its stale pidfile in
        let mut child = std::process::Command::new("/bin/true").spawn().unwrap();
        let pid = child.id();
        child.wait().unwrap();

        let stale = scratch_file("stale", format!("{pid}\n").as_bytes());
        kill_all(&[stale.clone()]);
        let _ = std::fs::remove_file(&stale);
    }
}
