// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable name to property key conversion.
//!
//! ```text
//! KAFKA_LOG_DIRS            -> kafka.log.dirs
//! SSL__CIPHER_SUITES        -> ssl_cipher.suites
//! LISTENER___NAME           -> listener-name
//! ```

/// Converts an environment variable name to a property key.
///
/// Underscore runs are rewritten, then the whole key is lowercased:
/// - a single `_` between two other characters becomes `.`
/// - `__` becomes `_`
/// - `___` becomes `-`
///
/// Runs of four or more underscores have no defined meaning. They are
/// rendered as one `-` per complete group of three, followed by a single
/// `_` if any underscores remain (`____` -> `-_`, `______` -> `--`).
/// A lone `_` at the start or end of the name is kept as `_`.
#[must_use]
pub fn convert_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '_' {
            key.extend(c.to_lowercase());
            continue;
        }

        let mut run = 1;
        while chars.next_if_eq(&'_').is_some() {
            run += 1;
        }
        let interior = !key.is_empty() && chars.peek().is_some();

        match run {
            1 if interior => key.push('.'),
            1 | 2 => key.push('_'),
            3 => key.push('-'),
            _ => {
                key.extend(std::iter::repeat_n('-', run / 3));
                if run % 3 != 0 {
                    key.push('_');
                }
            }
        }
    }

    key
}
