// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template helper functions.
//!
//! ```text
//! format_heritage()                               -> "# created by 'ub' ..."
//! get_env(name, default)                          -> snapshot value | default
//! split(value, separator)                         -> [String]
//! split_to_map_defaults(separator, defaults, value) -> {key: value}
//! ```
//!
//! Each helper exists twice: as a plain Rust function, and as a Tera
//! function taking named arguments that delegates to it.

use std::collections::{BTreeMap, HashMap};
use tera::Value;

use crate::core::env::container::Env;
use crate::properties::format_heritage;

/// Splits `value` on the literal `separator`.
///
/// An empty separator splits into single characters.
#[must_use]
pub fn split(value: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return value.chars().map(String::from).collect();
    }
    value.split(separator).map(str::to_owned).collect()
}

/// Parses a `separator`-delimited list of `key=value` entries.
///
/// Entries that do not contain exactly one `=` are dropped.
#[must_use]
pub fn kv_list_to_map(list: &str, separator: &str) -> BTreeMap<String, String> {
    split(list, separator)
        .iter()
        .filter_map(|entry| entry.split_once('='))
        .filter(|(_, value)| !value.contains('='))
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Parses both lists and merges them, `value` entries overriding `defaults`.
#[must_use]
pub fn split_to_map_defaults(
    separator: &str,
    defaults: &str,
    value: &str,
) -> BTreeMap<String, String> {
    let mut merged = kv_list_to_map(defaults, separator);
    merged.extend(kv_list_to_map(value, separator));
    merged
}

// --- Tera bindings ---

type Args = HashMap<String, Value>;

fn string_arg(args: &Args, function: &str, name: &str) -> tera::Result<String> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(tera::Error::msg(format!(
            "`{function}`: argument `{name}` must be a string, got `{other}`"
        ))),
        None => Err(tera::Error::msg(format!(
            "`{function}` requires a string argument `{name}`"
        ))),
    }
}

pub(super) fn format_heritage_fn(_args: &Args) -> tera::Result<Value> {
    Ok(Value::String(format_heritage()))
}

pub(super) fn get_env_fn(env: Env) -> impl tera::Function {
    move |args: &Args| -> tera::Result<Value> {
        let name = string_arg(args, "get_env", "name")?;
        let default = string_arg(args, "get_env", "default")?;
        Ok(Value::String(env.get_or(&name, &default).to_owned()))
    }
}

pub(super) fn split_fn(args: &Args) -> tera::Result<Value> {
    let value = string_arg(args, "split", "value")?;
    let separator = string_arg(args, "split", "separator")?;
    Ok(Value::Array(
        split(&value, &separator)
            .into_iter()
            .map(Value::String)
            .collect(),
    ))
}

pub(super) fn split_to_map_defaults_fn(args: &Args) -> tera::Result<Value> {
    let separator = string_arg(args, "split_to_map_defaults", "separator")?;
    let defaults = string_arg(args, "split_to_map_defaults", "defaults")?;
    let value = string_arg(args, "split_to_map_defaults", "value")?;
    Ok(Value::Object(
        split_to_map_defaults(&separator, &defaults, &value)
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    ))
}
