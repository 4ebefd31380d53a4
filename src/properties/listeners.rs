// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Listener rewriting.
//!
//! ```text
//! PLAINTEXT://broker:9092,SSL://broker:9093
//!   --> PLAINTEXT://0.0.0.0:9092,SSL://0.0.0.0:9093
//! ```

use anyhow::Context;
use regex::Regex;

use crate::error::Result;

/// Derives bind listeners from advertised listeners by replacing every host with `0.0.0.0`.
///
/// # Errors
///
/// Returns an error if the host pattern fails to compile.
pub fn listeners_from_advertised(advertised: &str) -> Result<String> {
    let regex = Regex::new("://(.*?):").context("failed to compile listener regex")?;
    Ok(regex.replace_all(advertised, "://0.0.0.0:").into_owned())
}
