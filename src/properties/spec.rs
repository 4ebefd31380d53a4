// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative config spec.
//!
//! ```json
//! {
//!   "prefixes": { "KAFKA": false, "CONFLUENT": true },
//!   "excludes": ["KAFKA_VERSION", "KAFKA_HEAP_OPTS"],
//!   "renamed":  { "KAFKA_ADVERTISED_HOST": "advertised.host.name" },
//!   "defaults": { "log.dirs": "/var/lib/kafka/data" }
//! }
//! ```
//!
//! Every field is optional; unknown fields are ignored. Capitalized field
//! names (`Prefixes`, ...) are accepted as well.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{SpecError, UbResult};

/// Rules for turning an environment snapshot into properties.
///
/// Ordered collections are used throughout so that prefix evaluation order,
/// and therefore collision resolution, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSpec {
    /// Prefix -> keep prefix in the generated key.
    #[serde(alias = "Prefixes", deserialize_with = "null_as_default")]
    pub prefixes: BTreeMap<String, bool>,
    /// Variable names never turned into properties via a prefix.
    #[serde(alias = "Excludes", deserialize_with = "null_as_default")]
    pub excludes: BTreeSet<String>,
    /// Variable name -> explicit property key.
    #[serde(alias = "Renamed", deserialize_with = "null_as_default")]
    pub renamed: BTreeMap<String, String>,
    /// Property key -> value used when no variable provides it.
    #[serde(alias = "Defaults", deserialize_with = "null_as_default")]
    pub defaults: BTreeMap<String, String>,
}

impl ConfigSpec {
    /// Spec that maps every variable starting with `prefix`, with the prefix stripped.
    #[must_use]
    pub fn prefix_only(prefix: impl Into<String>) -> Self {
        Self {
            prefixes: BTreeMap::from([(prefix.into(), false)]),
            ..Self::default()
        }
    }

    /// Load a spec from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Read`] if the file cannot be read and
    /// [`SpecError::Parse`] if it is not a valid spec document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> UbResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SpecError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse_named(&content, &path.display().to_string())
    }

    /// Parse a spec from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Parse`] if the content is not a valid spec document.
    pub fn parse(content: &str) -> UbResult<Self> {
        Self::parse_named(content, "<string>")
    }

    fn parse_named(content: &str, origin: &str) -> UbResult<Self> {
        serde_json::from_str(content).map_err(|source| {
            SpecError::Parse {
                path: origin.to_string(),
                source,
            }
            .into()
        })
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
