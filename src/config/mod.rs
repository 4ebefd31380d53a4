// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool settings.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (TOML)
//! 3. UB_* variables from the environment snapshot
//! 4. CUB_CLASSPATH
//! 5. CLI flags (applied by the caller)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! UB_LOG_LEVEL=debug         → log_level = 4
//! UB_POLL_INTERVAL_MS=250    → poll_interval_ms = 250
//! CUB_CLASSPATH=/opt/jars/*  → classpath = "/opt/jars/*"
//! ```
//!
//! These settings tune the tool itself. The config spec that drives property
//! generation is a separate JSON document, see [`crate::properties::spec`].

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::logging::LogLevel;
use loader::ConfigLoader;

/// Default classpath of the admin tool jars in Confluent images.
pub const DEFAULT_CLASSPATH: &str = "/usr/share/java/cp-base-new/*";

/// Settings for the `ub` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Console log level.
    pub log_level: LogLevel,
    /// Optional log file.
    pub log_file: Option<PathBuf>,
    /// Delay between attempts of polling checks (`wait`, `path-wait`, ...).
    pub poll_interval_ms: u64,
    /// Java executable used for the admin commands.
    pub java: String,
    /// Classpath holding the admin tool jars.
    pub classpath: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::WARN,
            log_file: None,
            poll_interval_ms: 1000,
            java: "java".to_string(),
            classpath: DEFAULT_CLASSPATH.to_string(),
        }
    }
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ub_rs::config::Settings;
    /// use ub_rs::core::env::current_env;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file("/etc/ub/ub.toml")
    ///     .with_env(&current_env())
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
