// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Applies a [`ConfigSpec`] to an environment snapshot.
//!
//! ```text
//! defaults --> properties
//!                  ^
//! for each variable (ascending name):
//!   renamed?  --> properties[renamed[name]] = value
//!   excluded? --> skip
//!   for each matching prefix (ascending):
//!     keep  --> convert_key(name)
//!     strip --> convert_key(name - prefix - separator)
//! ```

use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::key::convert_key;
use super::spec::ConfigSpec;
use crate::core::env::container::Env;

/// Property key -> value, kept sorted by key.
pub type Properties = BTreeMap<String, String>;

/// Builds the properties described by `spec` from `env`.
///
/// Variables are visited in ascending name order and prefixes in ascending
/// prefix order, so when two rows produce the same key the one visited last
/// wins and the result is the same on every run.
///
/// A prefix match with nothing after the separator (variable `KAFKA_` or
/// `KAFKA` for prefix `KAFKA` in strip mode) produces no row.
#[must_use]
pub fn build_properties(spec: &ConfigSpec, env: &Env) -> Properties {
    let mut properties = spec.defaults.clone();

    for (name, value) in env.iter() {
        if let Some(key) = spec.renamed.get(name) {
            debug!(variable = name, key = %key, "renamed");
            properties.insert(key.clone(), value.to_owned());
            continue;
        }

        if spec.excludes.contains(name) {
            trace!(variable = name, "excluded");
            continue;
        }

        for (prefix, &keep_prefix) in &spec.prefixes {
            let Some(rest) = name.strip_prefix(prefix.as_str()) else {
                continue;
            };

            let effective = if keep_prefix {
                name
            } else {
                strip_separator(rest)
            };
            if effective.is_empty() {
                debug!(variable = name, prefix = %prefix, "nothing left after prefix, skipped");
                continue;
            }

            let key = convert_key(effective);
            debug!(variable = name, prefix = %prefix, key = %key, "mapped");
            properties.insert(key, value.to_owned());
        }
    }

    properties
}

/// Drops the single separator character that follows a stripped prefix.
fn strip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}
