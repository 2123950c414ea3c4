// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawns a rendered script and relays its output as events.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::events::{Event, EventBus, ACTION_EXIT, ACTION_STDERR, ACTION_STDOUT};

use super::error::ExecError;

/// Read buffer size for the stdout/stderr relay tasks.
const CHUNK: usize = 4096;

/// Run a rendered script with `args` as positional parameters.
///
/// Persists the script to a transient artifact unique to this call,
/// spawns `bash <artifact> <args…>`, and relays output as it arrives:
/// every stdout chunk triggers a `stdout` event and every stderr chunk a
/// `stderr` event on `bus`, in per-stream arrival order (no ordering is
/// guaranteed across the two streams). Once the child terminates the
/// artifact is removed, success or failure, and a single `exit` event
/// carries the exit status before it is returned.
pub async fn run(rendered: &str, args: &[String], bus: &EventBus) -> Result<i32, ExecError> {
    let path = artifact_path();
    tokio::fs::write(&path, rendered)
        .await
        .map_err(|source| ExecError::Artifact { path: path.clone(), source })?;

    let result = supervise(&path, args, bus).await;

    // Best-effort, attempted exactly once; never suppresses the exit path.
    if let Err(error) = tokio::fs::remove_file(&path).await {
        tracing::warn!(path = %path.display(), %error, "failed to remove run artifact");
    }

    let code = result?;
    bus.trigger(ACTION_EXIT, &Event::Exited { code });
    Ok(code)
}

/// Unique transient location for one run's rendered script.
///
/// Uniqueness keeps concurrent runs in the same process from colliding,
/// and keeps one run's cleanup away from another run's artifact.
fn artifact_path() -> PathBuf {
    std::env::temp_dir().join(format!("lvsh-{}.sh", nanoid::nanoid!()))
}

async fn supervise(path: &Path, args: &[String], bus: &EventBus) -> Result<i32, ExecError> {
    let run_span = tracing::info_span!(
        "script.run",
        artifact = %path.display(),
        exit_code = tracing::field::Empty,
    );

    let mut child = Command::new("bash")
        .arg(path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| ExecError::Spawn { path: path.to_path_buf(), source })?;

    let mut relays = Vec::with_capacity(2);
    if let Some(stdout) = child.stdout.take() {
        relays.push(tokio::spawn(relay(
            stdout,
            ACTION_STDOUT,
            |chunk| Event::Stdout { chunk },
            bus.clone(),
        )));
    }
    if let Some(stderr) = child.stderr.take() {
        relays.push(tokio::spawn(relay(
            stderr,
            ACTION_STDERR,
            |chunk| Event::Stderr { chunk },
            bus.clone(),
        )));
    }

    let status = child.wait().await.map_err(|source| ExecError::Wait { source })?;

    // Drain the relay tasks so every chunk is delivered before the exit
    // notification.
    for task in relays {
        let _ = task.await;
    }

    let code = status.code().unwrap_or(-1);
    run_span.record("exit_code", code);
    Ok(code)
}

/// Copy chunks from one child stream to the bus until EOF.
async fn relay<R>(mut reader: R, action: &'static str, wrap: fn(Vec<u8>) -> Event, bus: EventBus)
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; CHUNK];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => bus.trigger(action, &wrap(buf[..n].to_vec())),
        }
    }
}
