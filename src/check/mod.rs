// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Readiness checks used by container entrypoints.
//!
//! ```text
//! ensure / ensure_at_least_one     Env snapshot lookups
//! check_path / wait_for_path       filesystem probes
//! wait_for_server                  TCP connect loop
//! wait_for_http                    TCP wait, then GET -> 2xx
//! HttpCheck + Service              REST endpoints of platform services
//!
//! Every check answers true/false. Err is reserved for checks that
//! cannot run at all (bad URL, unbuildable client).
//! ```

pub mod net;
pub mod path;

pub use net::{HttpCheck, Service, wait_for_http, wait_for_server};
pub use path::{PathCheck, check_path, wait_for_path};

use crate::core::env::container::Env;

/// Returns whether `name` is set in the snapshot. Empty values count as set.
#[must_use]
pub fn ensure(env: &Env, name: &str) -> bool {
    let found = env.contains(name);
    if !found {
        tracing::warn!(variable = name, "environment variable is not set");
    }
    found
}

/// Returns whether at least one of `names` is set in the snapshot.
#[must_use]
pub fn ensure_at_least_one<S: AsRef<str>>(env: &Env, names: &[S]) -> bool {
    let found = names.iter().any(|name| env.contains(name.as_ref()));
    if !found {
        let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        tracing::warn!(variables = ?names, "none of the environment variables is set");
    }
    found
}

#[cfg(test)]
mod tests;
