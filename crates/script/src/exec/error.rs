// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for script execution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while supervising a run.
///
/// A command failing *inside* the generated script is not an error at
/// this level — it surfaces only through the relayed streams and the
/// exit status, like any hand-written bash script.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The run artifact could not be written.
    #[error("failed to write run artifact {path}: {source}")]
    Artifact {
        /// Transient artifact location.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shell process could not be spawned.
    #[error("failed to spawn bash for {path}: {source}")]
    Spawn {
        /// Transient artifact location.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the child process failed.
    #[error("failed waiting for child process: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },
}
