// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ub-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ub [global options] <command>
//! render-template | render-properties | render-properties-prefix
//! ensure | ensure-atleast-one
//! path | path-wait | wait | http-ready
//! sr-ready | kr-ready | connect-ready | ksql-server-ready | control-center-ready
//! listeners
//! kafka-ready | zk-ready | ensure-topic
//! ```

pub mod admin;
pub mod check;
pub mod global;
pub mod render;


use crate::cli::admin::{EnsureTopicArgs, KafkaReadyArgs, ZkReadyArgs};
use crate::cli::check::{
    EnsureArgs, EnsureAtLeastOneArgs, HttpReadyArgs, ListenersArgs, PathArgs, PathWaitArgs,
    ServiceArgs, WaitArgs,
};
use crate::cli::global::GlobalOptions;
use crate::cli::render::{RenderPrefixArgs, RenderPropertiesArgs, RenderTemplateArgs};
use clap::{Parser, Subcommand};
use std::ffi::OsString;

/// Container Utility Belt
///
/// Renders service configuration from environment variables and checks
/// that the services a container depends on are ready.
#[derive(Debug, Parser)]
#[command(
    name = "ub",
    author,
    version,
    about = "Container Utility Belt",
    long_about = "ub-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Renders service configuration from environment variables and\n\
                  checks that the services a container depends on are ready.\n\n\
                  Rendered output goes to stdout, diagnostics to stderr. Checks\n\
                  exit with status 1 when the condition is not met.",
    after_help = "SETTINGS:\n\n\
                  Tool settings are read from the file given with --config, then\n\
                  from UB_* environment variables (UB_LOG_LEVEL, UB_LOG_FILE,\n\
                  UB_POLL_INTERVAL_MS, UB_JAVA). CUB_CLASSPATH sets the classpath\n\
                  of the admin commands. Command-line flags win over both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Renders a template with the environment.
    #[command(name = "render-template")]
    RenderTemplate(RenderTemplateArgs),

    /// Renders properties as described by a config spec file.
    #[command(name = "render-properties")]
    RenderProperties(RenderPropertiesArgs),

    /// Renders properties from all variables with a prefix.
    #[command(name = "render-properties-prefix")]
    RenderPropertiesPrefix(RenderPrefixArgs),

    /// Retired; use one of the render commands.
    #[command(hide = true)]
    Template,

    /// Succeeds if the environment variable is set.
    Ensure(EnsureArgs),

    /// Succeeds if at least one of the environment variables is set.
    #[command(name = "ensure-atleast-one")]
    EnsureAtLeastOne(EnsureAtLeastOneArgs),

    /// Checks a property of a path.
    Path(PathArgs),

    /// Waits for a path to exist.
    #[command(name = "path-wait")]
    PathWait(PathWaitArgs),

    /// Waits for a TCP port to accept connections.
    Wait(WaitArgs),

    /// Waits for a URL to answer with a 2xx status.
    #[command(name = "http-ready")]
    HttpReady(HttpReadyArgs),

    /// Checks that Schema Registry is ready.
    #[command(name = "sr-ready")]
    SrReady(ServiceArgs),

    /// Checks that the Kafka REST proxy is ready.
    #[command(name = "kr-ready")]
    KrReady(ServiceArgs),

    /// Checks that Kafka Connect is ready.
    #[command(name = "connect-ready")]
    ConnectReady(ServiceArgs),

    /// Checks that ksqlDB server is ready.
    #[command(name = "ksql-server-ready")]
    KsqlServerReady(ServiceArgs),

    /// Checks that Control Center is ready.
    #[command(name = "control-center-ready")]
    ControlCenterReady(ServiceArgs),

    /// Prints bind listeners derived from advertised listeners.
    Listeners(ListenersArgs),

    /// Waits for a minimum number of Kafka brokers.
    #[command(name = "kafka-ready")]
    KafkaReady(KafkaReadyArgs),

    /// Waits for ZooKeeper.
    #[command(name = "zk-ready")]
    ZkReady(ZkReadyArgs),

    /// Creates or validates topics.
    #[command(name = "ensure-topic")]
    EnsureTopic(EnsureTopicArgs),
}

/// Long flags that entrypoint scripts also spell with a single dash
/// (`-secure`, `-username=admin`).
const SINGLE_DASH_FLAGS: [&str; 5] = [
    "secure",
    "ignore_cert",
    "username",
    "password",
    "create_if_not_exists",
];

fn is_single_dash_flag(arg: &str) -> bool {
    arg.strip_prefix('-')
        .filter(|rest| !rest.starts_with('-'))
        .map(|rest| rest.split_once('=').map_or(rest, |(name, _)| name))
        .is_some_and(|name| SINGLE_DASH_FLAGS.contains(&name))
}

/// Rewrites single-dash long flags to their `--` form.
///
/// Arguments after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut options_ended = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if options_ended {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    options_ended = true;
                    arg
                }
                Some(flag) if is_single_dash_flag(flag) => OsString::from(format!("-{flag}")),
                _ => arg,
            }
        })
        .collect()
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::parse_from(normalize_args(iter))
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    try_parse_from(std::env::args_os())
}

/// Tries to parse arguments from an iterator.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize_args(iter))
}
