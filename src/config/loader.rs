// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file()
//!   .add_toml_str()
//!   .with_env(&Env)
//!   .set()
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::path::Path;

use super::Settings;
use crate::core::env::container::Env;
use crate::error::Result;

/// Prefix of the variables that override settings.
pub const ENV_PREFIX: &str = "UB";

/// Variable that overrides the admin classpath.
pub const CLASSPATH_VAR: &str = "CUB_CLASSPATH";

/// Builder for loading settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_vars: Option<config::Map<String, String>>,
    classpath: Option<String>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_vars: None,
            classpath: None,
        }
    }

    /// Adds a required TOML settings file.
    ///
    /// The file is read when `build()` is called; a missing or invalid file
    /// makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Takes `UB_*` overrides and `CUB_CLASSPATH` from the snapshot.
    ///
    /// The live process environment is never consulted.
    #[must_use]
    pub fn with_env(mut self, env: &Env) -> Self {
        let prefix = format!("{ENV_PREFIX}_");
        self.env_vars = Some(
            env.iter()
                .filter(|(k, _)| k.starts_with(&prefix))
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        );
        self.classpath = env.get(CLASSPATH_VAR).map(str::to_owned);
        self
    }

    /// Sets a settings override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required settings files are missing.
    /// - Settings files have invalid TOML syntax.
    /// - A `UB_*` variable holds a value of the wrong type.
    pub fn build(self) -> Result<Settings> {
        let builder = match self.env_vars {
            Some(vars) => self.builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true)
                    .source(Some(vars)),
            ),
            None => self.builder,
        };
        let builder = match self.classpath {
            Some(classpath) => builder.set_override("classpath", classpath)?,
            None => builder,
        };
        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
