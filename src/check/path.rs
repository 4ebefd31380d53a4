// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem probes.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;
use tracing::{debug, trace};

/// Property of a path to verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathCheck {
    /// The current user can read the path.
    Readable,
    /// The current user can write the path.
    Writable,
    /// Any execute bit is set.
    Executable,
    /// The path exists.
    Existence,
}

/// Checks `path` for the given property.
#[must_use]
pub fn check_path(path: &Path, check: PathCheck) -> bool {
    let result = match check {
        PathCheck::Readable => is_readable(path),
        PathCheck::Writable => is_writable(path),
        PathCheck::Executable => is_executable(path),
        PathCheck::Existence => path.exists(),
    };
    debug!(path = %path.display(), ?check, result, "path check");
    result
}

fn is_readable(path: &Path) -> bool {
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

/// Directories are probed by creating an anonymous temporary file in them.
fn is_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => tempfile::tempfile_in(path).is_ok(),
        Ok(_) => OpenOptions::new().append(true).open(path).is_ok(),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(path) {
        Ok(metadata) => metadata.permissions().mode() & 0o111 != 0,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot check executable status");
            false
        }
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Polls until `path` exists or `timeout` elapses.
pub async fn wait_for_path(path: &Path, timeout: Duration, poll_interval: Duration) -> bool {
    let poll = async {
        loop {
            if path.exists() {
                return;
            }
            trace!(path = %path.display(), "path does not exist yet");
            tokio::time::sleep(poll_interval).await;
        }
    };
    tokio::time::timeout(timeout, poll).await.is_ok()
}
