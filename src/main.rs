// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> current_env() --> Settings --> Logging --> Command Dispatch
//!   Render | Check | Admin
//! ```

use std::io::{BufWriter, Write};
use std::process::ExitCode;

use ub_rs::check::Service;
use ub_rs::cli::global::GlobalOptions;
use ub_rs::cli::{self, Command};
use ub_rs::cmd::admin::{run_ensure_topic_command, run_kafka_ready_command, run_zk_ready_command};
use ub_rs::cmd::check::{
    run_ensure_at_least_one_command, run_ensure_command, run_http_ready_command,
    run_path_command, run_path_wait_command, run_service_command, run_wait_command,
};
use ub_rs::cmd::render::{
    run_listeners_command, run_render_prefix_command, run_render_properties_command,
    run_render_template_command,
};
use ub_rs::config::Settings;
use ub_rs::core::env::container::Env;
use ub_rs::core::env::current_env;
use ub_rs::error::Result;
use ub_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Exit status of the retired `template` command.
const RETIRED_COMMAND: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let env = current_env();

    let settings = match load_settings(&cli.global, &env) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch_command(&cli.command, &env, &settings).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_settings(global: &GlobalOptions, env: &Env) -> Result<Settings> {
    let mut loader = Settings::builder();
    if let Some(ref path) = global.config {
        loader = loader.add_toml_file(path);
    }
    global.apply(loader.with_env(env))?.build()
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.log_level)
        .maybe_with_log_file(settings.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

/// Runs a render command against locked stdout.
fn render<F>(render: F) -> Result<bool>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&mut out)?;
    out.flush()?;
    Ok(true)
}

const fn status(ready: bool) -> ExitCode {
    if ready {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn dispatch_command(command: &Command, env: &Env, settings: &Settings) -> Result<ExitCode> {
    let ready = match command {
        Command::RenderTemplate(args) => {
            render(|mut out| run_render_template_command(args, env, &mut out))?
        }
        Command::RenderProperties(args) => {
            render(|mut out| run_render_properties_command(args, env, &mut out))?
        }
        Command::RenderPropertiesPrefix(args) => {
            render(|mut out| run_render_prefix_command(args, env, &mut out))?
        }
        Command::Listeners(args) => render(|mut out| run_listeners_command(args, &mut out))?,
        Command::Template => {
            eprintln!(
                "templating no longer supported, use 'render-template', 'render-properties', or 'render-properties-prefix' instead"
            );
            return Ok(ExitCode::from(RETIRED_COMMAND));
        }
        Command::Ensure(args) => run_ensure_command(args, env),
        Command::EnsureAtLeastOne(args) => run_ensure_at_least_one_command(args, env),
        Command::Path(args) => run_path_command(args),
        Command::PathWait(args) => run_path_wait_command(args, settings).await,
        Command::Wait(args) => run_wait_command(args, settings).await,
        Command::HttpReady(args) => run_http_ready_command(args, settings).await?,
        Command::SrReady(args) => {
            run_service_command(Service::SchemaRegistry, args, settings).await?
        }
        Command::KrReady(args) => run_service_command(Service::KafkaRest, args, settings).await?,
        Command::ConnectReady(args) => {
            run_service_command(Service::Connect, args, settings).await?
        }
        Command::KsqlServerReady(args) => {
            run_service_command(Service::KsqlServer, args, settings).await?
        }
        Command::ControlCenterReady(args) => {
            run_service_command(Service::ControlCenter, args, settings).await?
        }
        Command::KafkaReady(args) => run_kafka_ready_command(args, env, settings).await?,
        Command::ZkReady(args) => run_zk_ready_command(args, env, settings).await?,
        Command::EnsureTopic(args) => run_ensure_topic_command(args, env, settings).await?,
    };
    Ok(status(ready))
}
