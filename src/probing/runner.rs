//! Bounded-lifetime probe execution.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

/// How one probe process ended: the explicit race result between "process
/// exited" and "timer fired", plus the spawn-failure case.
#[derive(Debug)]
pub(crate) enum ProbeExit {
    /// The process terminated on its own before the timer fired.
    Exited(ExitStatus),

    /// The timer fired first. The process has been killed and reaped; it is
    /// no longer running when this value is returned.
    TimedOut,

    /// The process could not be spawned or waited on.
    SpawnFailed(std::io::Error),
}

/// Run a probe command to completion or until `timeout` elapses.
///
/// Standard input is disconnected so the probe can never block on interactive
/// input. Output is discarded: only the exit status matters. On timeout the
/// child receives a non-catchable kill and is reaped before this function
/// returns, so no probe leaves a process running past its own resolution.
pub(crate) async fn run_probe(program: &Path, args: &[&str], timeout: Duration) -> ProbeExit {
    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return ProbeExit::SpawnFailed(e),
    };

    match time::timeout(timeout, child.wait()).await {
        Ok(Ok(status)) => ProbeExit::Exited(status),
        Ok(Err(e)) => ProbeExit::SpawnFailed(e),
        Err(_) => {
            debug!(program = %program.display(), ?timeout, "probe timed out, killing");
            // Kill and reap so the child cannot outlive the probe.
            let _ = child.start_kill();
            let _ = child.wait().await;
            ProbeExit::TimedOut
        }
    }
}
