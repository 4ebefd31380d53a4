// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            UbError (~24 bytes)
//!                   |
//!   +-------+-------+-------+-------+------+
//!   |       |       |       |       |      |
//!   v       v       v       v       v      v
//!  Spec  Template  Check  Admin   Sink   Other
//!  Box     Box      Box    Box    Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Spec      Read, Parse
//!   Template  Parse, Render
//!   Check     InvalidUrl, UnknownPort, Client
//!   Admin     JavaNotFound, SpawnFailed
//!   Sink      io::Error from the output stream
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`UbError`].
pub type UbResult<T> = std::result::Result<T, UbError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum UbError {
    /// Config spec could not be loaded.
    #[error("spec error: {0}")]
    Spec(#[from] Box<SpecError>),

    /// Template could not be parsed or rendered.
    #[error("template error: {0}")]
    Template(#[from] Box<TemplateError>),

    /// Readiness check could not be performed.
    #[error("check error: {0}")]
    Check(#[from] Box<CheckError>),

    /// Admin command could not be launched.
    #[error("admin error: {0}")]
    Admin(#[from] Box<AdminError>),

    /// The output sink rejected a write.
    #[error("failed to write output: {0}")]
    Sink(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Wraps an output-stream failure as [`UbError::Sink`].
pub fn sink_error(err: std::io::Error) -> UbError {
    UbError::Sink(Box::new(err))
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for UbError {
                fn from(err: $error) -> Self {
                    UbError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SpecError => Spec,
    TemplateError => Template,
    CheckError => Check,
    AdminError => Admin,
}

// --- Spec Errors ---

/// Errors raised while loading a config spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec file could not be read.
    #[error("failed to read spec file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Spec content is not a valid spec document.
    #[error("failed to parse spec '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// --- Template Errors ---

/// Errors raised by the templating engine.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template body is malformed.
    #[error("failed to parse template '{name}'")]
    Parse {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// Rendering failed, e.g. a function was called with the wrong arguments.
    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

// --- Check Errors ---

/// Errors that prevent a readiness check from running at all.
///
/// A check that runs and observes "not ready" is not an error; it returns `false`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// URL could not be parsed.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// No port given and none can be inferred from the scheme.
    #[error("no port in '{url}' and cannot infer one for scheme '{scheme}' (only http(s) supported)")]
    UnknownPort { url: String, scheme: String },

    /// HTTP client could not be built.
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

// --- Admin Errors ---

/// Errors launching the JVM admin tools.
#[derive(Debug, Error)]
pub enum AdminError {
    /// `java` is not on the PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    JavaNotFound { name: String },

    /// The JVM process could not be spawned.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
