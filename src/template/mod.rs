// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Template rendering with Tera.
//!
//! ```text
//! template body + Env
//!        |
//!        v
//!   Tera::default()
//!   + format_heritage / get_env / split / split_to_map_defaults
//!   + context { env: {NAME: value, ...} }
//!        |
//!        v
//!   render to String --> sink
//! ```
//!
//! # Example
//!
//! ```text
//! {{ format_heritage() }}
//! log4j.rootLogger={{ get_env(name="KAFKA_LOG4J_ROOT_LOGLEVEL", default="INFO") }}, stdout
//! {% set overrides = get_env(name="KAFKA_LOG4J_LOGGERS", default="") -%}
//! {% set loggers = split_to_map_defaults(separator=",", defaults="kafka=INFO", value=overrides) -%}
//! {% for logger, level in loggers -%}
//! log4j.logger.{{ logger }}={{ level }}
//! {% endfor -%}
//! ```

pub mod functions;


use std::io::Write;
use tera::{Context, Tera};
use tracing::debug;

use crate::core::env::container::Env;
use crate::error::{TemplateError, UbResult, sink_error};

/// Name under which the template body is registered.
pub const TEMPLATE_NAME: &str = "template";

/// Registers the helper functions, bound to `env`, into `tera`.
pub fn register_functions(tera: &mut Tera, env: &Env) {
    tera.register_function("format_heritage", functions::format_heritage_fn);
    tera.register_function("get_env", functions::get_env_fn(env.clone()));
    tera.register_function("split", functions::split_fn);
    tera.register_function("split_to_map_defaults", functions::split_to_map_defaults_fn);
}

/// Renders `body` against `env` and returns the output.
///
/// # Errors
///
/// Returns [`TemplateError::Parse`] for a malformed body and
/// [`TemplateError::Render`] when rendering fails, e.g. on a helper called
/// with missing or non-string arguments.
pub fn render_to_string(body: &str, env: &Env) -> UbResult<String> {
    let mut tera = Tera::default();
    register_functions(&mut tera, env);
    tera.add_raw_template(TEMPLATE_NAME, body)
        .map_err(|source| TemplateError::Parse {
            name: TEMPLATE_NAME.to_string(),
            source,
        })?;

    let mut context = Context::new();
    context.insert("env", env.as_map());

    let rendered = tera
        .render(TEMPLATE_NAME, &context)
        .map_err(|source| TemplateError::Render {
            name: TEMPLATE_NAME.to_string(),
            source,
        })?;
    debug!(bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

/// Renders `body` against `env` into `out`.
///
/// Nothing is written unless rendering succeeds.
///
/// # Errors
///
/// Returns template errors as for [`render_to_string`] and
/// [`crate::error::UbError::Sink`] if writing to `out` fails.
pub fn render_template<W: Write>(body: &str, env: &Env, out: &mut W) -> UbResult<()> {
    let rendered = render_to_string(body, env)?;
    out.write_all(rendered.as_bytes()).map_err(sink_error)?;
    out.flush().map_err(sink_error)
}
