//! Fire-and-forget process spawning.

use crate::error::LaunchError;
use log::{debug, info, warn};
use std::io;
use std::process::{Child, Command, Stdio};
use std::thread;

/// Start `program_path` as an independent process and return immediately.
///
/// The program gets no arguments and no inherited stdio, and runs in its
/// own process group so it outlives the launcher. Nothing is propagated
/// except the returned error.
pub fn launch(program_path: &str) -> Result<(), LaunchError> {
    let program_path = program_path.trim();
    if program_path.is_empty() {
        return Err(LaunchError::Failed {
            path: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty program path"),
        });
    }

    let mut cmd = Command::new(program_path);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    detach(&mut cmd);

    let child = cmd.spawn().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LaunchError::NotFound(program_path.to_string()),
        _ => LaunchError::Failed {
            path: program_path.to_string(),
            source: e,
        },
    })?;

    info!("Launched {} (pid {})", program_path, child.id());
    reap_in_background(child, program_path);

    Ok(())
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;

    // New process group: a Ctrl-C aimed at the launcher does not reach it.
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;

    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}

/// Wait on the child from a throwaway thread so it never lingers as a zombie.
fn reap_in_background(mut child: Child, program_path: &str) {
    let pid = child.id();
    let name = program_path.to_string();

    let spawned = thread::Builder::new()
        .name(format!("reap-{}", pid))
        .spawn(move || match child.wait() {
            Ok(status) => debug!("{} (pid {}) exited: {}", name, pid, status),
            Err(e) => debug!("Lost track of {} (pid {}): {}", name, pid, e),
        });

    if let Err(e) = spawned {
        warn!("Failed to spawn reaper for pid {}: {}", pid, e);
    }
}
