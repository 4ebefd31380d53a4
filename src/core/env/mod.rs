// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment snapshot.
//!
//! # Architecture
//!
//! ```text
//! std::env::vars_os() --current_env()--> Env (immutable BTreeMap)
//!                                          |
//!              +--------------+------------+------------+
//!              v              v            v            v
//!          properties      template      checks      settings
//! ```
//!
//! - **Captured once**: nothing else in the crate reads the process environment
//! - **Sorted**: iteration is in ascending variable-name order
//! - **UTF-8 only**: variables whose name or value is not UTF-8 are dropped

pub mod container;


use tracing::trace;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                trace!(key = ?key, "skipping non UTF-8 environment variable");
                None
            }
        })
        .collect()
}
