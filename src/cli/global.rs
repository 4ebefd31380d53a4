// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← TOML settings file
//! --log-level N     ← Console verbosity (0-5 or name)
//! --log-file FILE   ← Also log to FILE
//!
//! Precedence: CLI flags > UB_* variables > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to a TOML settings file.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Console log level (0=off, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Applies these options as the highest-priority settings layer.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be stored.
    pub fn apply(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("log_level", i64::from(level.as_u8()))?;
        }
        if let Some(ref path) = self.log_file {
            loader = loader.set("log_file", path.display().to_string())?;
        }
        Ok(loader)
    }
}
