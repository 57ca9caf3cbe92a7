//! Process start abstraction.
//!
//! The [`Spawner`] trait decouples the launch driver from the OS process API.
//! Tests use a recording spawner that never starts real processes.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument};

/// Starts an application without waiting for it.
pub trait Spawner {
    /// Start `path` as an independent process. Returns once the process exists.
    fn spawn(&self, path: &Path) -> Result<()>;
}

/// Spawner that detaches the child from the launcher's lifetime.
///
/// Stdio is nulled, the child gets its own process group, and the handle is
/// dropped without waiting.
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn spawn(&self, path: &Path) -> Result<()> {
        let program = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let mut cmd = Command::new(&program);
        if let Some(dir) = program.parent().filter(|d| !d.as_os_str().is_empty()) {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);

        debug!(program = %program.display(), "spawning application");
        match cmd.spawn() {
            #[allow(clippy::zombie_processes)]
            Ok(child) => {
                debug!(pid = child.id(), "application started");
                drop(child);
                Ok(())
            }
            Err(e) => {
                error!(err = %e, "failed to spawn application");
                Err(e).with_context(|| format!("spawn {}", program.display()))
            }
        }
    }
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x00000008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x00000200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}
