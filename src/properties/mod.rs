// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment to properties transformation.
//!
//! ```text
//! Env + ConfigSpec
//!        |
//!        v
//!  build_properties()   key::convert_key per variable
//!        |
//!        v
//!   Properties (BTreeMap)
//!        |
//!        v
//!  write_config()       heritage line + sorted key=value
//!        |
//!        v
//!      sink
//! ```

pub mod builder;
pub mod key;
pub mod listeners;
pub mod spec;
pub mod writer;


use std::io::Write;
use tracing::debug;

use crate::core::env::container::Env;
use crate::error::UbResult;

pub use builder::{Properties, build_properties};
pub use key::convert_key;
pub use spec::ConfigSpec;
pub use writer::{format_heritage, write_config};

/// Builds properties from `spec` and writes them to `out`.
///
/// # Errors
///
/// Returns [`crate::error::UbError::Sink`] if writing to `out` fails.
pub fn build_and_write<W: Write>(spec: &ConfigSpec, env: &Env, out: &mut W) -> UbResult<()> {
    let properties = build_properties(spec, env);
    debug!(count = properties.len(), "built properties");
    write_config(out, &properties)
}

/// Writes every variable starting with `prefix` (prefix stripped) to `out`.
///
/// # Errors
///
/// Returns [`crate::error::UbError::Sink`] if writing to `out` fails.
pub fn build_and_write_prefix_only<W: Write>(prefix: &str, env: &Env, out: &mut W) -> UbResult<()> {
    build_and_write(&ConfigSpec::prefix_only(prefix), env, out)
}
