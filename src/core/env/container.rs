// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable environment snapshot.
//!
//! ```text
//! Env
//! vars: Arc<BTreeMap<String, String>>
//! clone shares the map; there are no mutators
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

/// A read-only snapshot of environment variables.
///
/// Cloning is cheap: clones share the same underlying map. Keys are
/// case-sensitive, as they are inside a Linux container.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Arc<BTreeMap<String, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Gets an environment variable value, falling back to `default` when unset.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Returns the underlying sorted map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Returns all environment variables as an owned map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.vars).clone()
    }

    /// Returns an iterator over variables in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
