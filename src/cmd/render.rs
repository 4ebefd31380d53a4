// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render command implementations.

use anyhow::Context;
use std::io::Write;
use tracing::info;

use crate::cli::check::ListenersArgs;
use crate::cli::render::{RenderPrefixArgs, RenderPropertiesArgs, RenderTemplateArgs};
use crate::core::env::container::Env;
use crate::error::{Result, sink_error};
use crate::properties::listeners::listeners_from_advertised;
use crate::properties::{ConfigSpec, build_and_write, build_and_write_prefix_only};
use crate::template::render_template;

/// Renders the template file to `out`.
///
/// # Errors
///
/// Returns an error if the template cannot be read, parsed, rendered or written.
pub fn run_render_template_command<W: Write>(
    args: &RenderTemplateArgs,
    env: &Env,
    out: &mut W,
) -> Result<()> {
    let body = std::fs::read_to_string(&args.template)
        .with_context(|| format!("failed to read template {}", args.template.display()))?;
    render_template(&body, env, out)?;
    info!(template = %args.template.display(), "rendered template");
    Ok(())
}

/// Renders properties described by the spec file to `out`.
///
/// # Errors
///
/// Returns an error if the spec cannot be loaded or the output cannot be written.
pub fn run_render_properties_command<W: Write>(
    args: &RenderPropertiesArgs,
    env: &Env,
    out: &mut W,
) -> Result<()> {
    let spec = ConfigSpec::from_file(&args.spec)?;
    build_and_write(&spec, env, out)?;
    info!(spec = %args.spec.display(), "rendered properties");
    Ok(())
}

/// Renders properties of every variable carrying the prefix to `out`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_render_prefix_command<W: Write>(
    args: &RenderPrefixArgs,
    env: &Env,
    out: &mut W,
) -> Result<()> {
    build_and_write_prefix_only(&args.prefix, env, out)?;
    info!(prefix = %args.prefix, "rendered properties");
    Ok(())
}

/// Prints the bind listeners for the advertised listeners.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run_listeners_command<W: Write>(args: &ListenersArgs, out: &mut W) -> Result<()> {
    let listeners = listeners_from_advertised(&args.advertised)?;
    writeln!(out, "{listeners}").map_err(sink_error)?;
    out.flush().map_err(sink_error)?;
    Ok(())
}
