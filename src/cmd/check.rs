// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check command implementations.

use std::time::Duration;
use tracing::info;

use crate::check::{self, HttpCheck, Service};
use crate::cli::check::{
    EnsureArgs, EnsureAtLeastOneArgs, HttpReadyArgs, PathArgs, PathWaitArgs, ServiceArgs,
    WaitArgs,
};
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::error::Result;

#[must_use]
pub fn run_ensure_command(args: &EnsureArgs, env: &Env) -> bool {
    check::ensure(env, &args.variable)
}

#[must_use]
pub fn run_ensure_at_least_one_command(args: &EnsureAtLeastOneArgs, env: &Env) -> bool {
    check::ensure_at_least_one(env, args.variables.as_slice())
}

#[must_use]
pub fn run_path_command(args: &PathArgs) -> bool {
    check::check_path(&args.path, args.check)
}

pub async fn run_path_wait_command(args: &PathWaitArgs, settings: &Settings) -> bool {
    let timeout = Duration::from_secs(args.timeout);
    let found = check::wait_for_path(&args.path, timeout, settings.poll_interval()).await;
    if found {
        info!(path = %args.path.display(), "path exists");
    }
    found
}

pub async fn run_wait_command(args: &WaitArgs, settings: &Settings) -> bool {
    let timeout = Duration::from_secs(args.timeout);
    check::wait_for_server(&args.address, timeout, settings.poll_interval()).await
}

/// Waits for the URL to answer with a 2xx status.
///
/// # Errors
///
/// Returns an error if the URL is invalid or has no usable port.
pub async fn run_http_ready_command(args: &HttpReadyArgs, settings: &Settings) -> Result<bool> {
    let timeout = Duration::from_secs(args.timeout);
    Ok(check::wait_for_http(&args.url, timeout, settings.poll_interval()).await?)
}

/// Runs the readiness check of `service`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn run_service_command(
    service: Service,
    args: &ServiceArgs,
    settings: &Settings,
) -> Result<bool> {
    let ready = HttpCheck::builder()
        .host(args.host.as_str())
        .port(args.port)
        .timeout(Duration::from_secs(args.timeout))
        .secure(args.secure)
        .ignore_cert(args.ignore_cert)
        .maybe_username(args.username.as_deref())
        .maybe_password(args.password.as_deref())
        .poll_interval(settings.poll_interval())
        .build()
        .check_service(service)
        .await?;

    if ready {
        info!(?service, host = %args.host, port = args.port, "service is ready");
    }
    Ok(ready)
}
