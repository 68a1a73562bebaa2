// Runs short-lived external commands and captures their stdout.
// Every failure mode (spawn error, timeout, non-zero exit, non-UTF-8 output) is
// logged and collapsed into `None`, so discovery code never has to handle process errors.

// Only the Windows registry locator calls into this module outside of tests.
#![cfg_attr(not(windows), allow(dead_code))]

use crate::{log_debug, log_warn};
use colored::Colorize;
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Interval between exit-status polls once stdout has been drained.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs `command` and returns its stdout if it exits successfully within `timeout`.
///
/// Stdout is drained on a helper thread so that a child that never closes its
/// output cannot block us past the deadline. On expiry the child is killed.
///
/// # Arguments
/// * `command`: The fully configured command. Its stdio handles are overridden.
/// * `timeout`: Upper bound for the whole invocation.
///
/// # Returns
/// * `Some(String)` with the captured stdout, `None` on any failure.
pub fn capture_stdout(mut command: Command, timeout: Duration) -> Option<String> {
    let program = command.get_program().to_string_lossy().into_owned();
    let deadline = Instant::now() + timeout;

    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(e) => {
            log_debug!("[Process] Could not start '{}': {}", program, e);
            return None;
        }
    };

    let Some(mut stdout) = child.stdout.take() else {
        terminate(&mut child);
        return None;
    };

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let result = stdout.read_to_end(&mut buffer).map(|_| buffer);
        // The receiver is gone if we already gave up on this child.
        let _ = tx.send(result);
    });

    let bytes = match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            log_debug!("[Process] Failed to read output of '{}': {}", program, e);
            terminate(&mut child);
            return None;
        }
        Err(_) => {
            log_warn!(
                "[Process] '{}' did not finish within {:?}. Giving up.",
                program.yellow(),
                timeout
            );
            terminate(&mut child);
            return None;
        }
    };

    loop {
        match child.try_wait() {
            Ok(Some(status)) if status.success() => break,
            Ok(Some(status)) => {
                log_debug!("[Process] '{}' exited with {}", program, status);
                return None;
            }
            Ok(None) if Instant::now() < deadline => thread::sleep(POLL_INTERVAL),
            Ok(None) => {
                log_warn!(
                    "[Process] '{}' did not exit within {:?}. Giving up.",
                    program.yellow(),
                    timeout
                );
                terminate(&mut child);
                return None;
            }
            Err(e) => {
                log_debug!("[Process] Could not wait for '{}': {}", program, e);
                terminate(&mut child);
                return None;
            }
        }
    }

    match String::from_utf8(bytes) {
        Ok(output) => Some(output),
        Err(e) => {
            log_debug!("[Process] Output of '{}' is not valid UTF-8: {}", program, e);
            None
        }
    }
}

fn terminate(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_none() {
        let command = Command::new("studio-sync-definitely-not-a-real-program");
        assert_eq!(capture_stdout(command, Duration::from_secs(2)), None);
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_successful_command() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'hello'"]);
        assert_eq!(
            capture_stdout(command, Duration::from_secs(5)).as_deref(),
            Some("hello")
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_none() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo partial; exit 3"]);
        assert_eq!(capture_stdout(command, Duration::from_secs(5)), None);
    }

    #[cfg(unix)]
    #[test]
    fn timeout_is_none() {
        let mut command = Command::new("sh");
        command.args(["-c", "exec sleep 10"]);

        let started = Instant::now();
        assert_eq!(capture_stdout(command, Duration::from_millis(200)), None);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
