// ub-rs: Container Utility Belt
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Admin command implementations.

use crate::admin::{EnsureTopic, JavaCommand, KafkaReady};
use crate::cli::admin::{EnsureTopicArgs, KafkaReadyArgs, ZkReadyArgs};
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::error::Result;

async fn run_java(command: &JavaCommand, settings: &Settings) -> Result<bool> {
    Ok(command.run(&settings.java, &settings.classpath).await?)
}

/// Waits for the minimum number of brokers.
///
/// # Errors
///
/// Returns an error if `java` cannot be found or started.
pub async fn run_kafka_ready_command(
    args: &KafkaReadyArgs,
    env: &Env,
    settings: &Settings,
) -> Result<bool> {
    let request = KafkaReady::builder()
        .min_brokers(args.min_brokers)
        .timeout_secs(args.timeout)
        .maybe_bootstrap_servers(args.bootstrap_servers.as_deref())
        .maybe_zookeeper_connect(args.zookeeper_connect.as_deref())
        .maybe_config(args.config.as_deref())
        .maybe_security_protocol(args.security_protocol.as_deref())
        .build();
    run_java(&JavaCommand::kafka_ready(&request, env), settings).await
}

/// Waits for ZooKeeper.
///
/// # Errors
///
/// Returns an error if `java` cannot be found or started.
pub async fn run_zk_ready_command(args: &ZkReadyArgs, env: &Env, settings: &Settings) -> Result<bool> {
    run_java(&JavaCommand::zk_ready(&args.connect, args.timeout, env), settings).await
}

/// Creates or validates topics.
///
/// # Errors
///
/// Returns an error if `java` cannot be found or started.
pub async fn run_ensure_topic_command(
    args: &EnsureTopicArgs,
    env: &Env,
    settings: &Settings,
) -> Result<bool> {
    let request = EnsureTopic::builder()
        .config(args.config.as_str())
        .topic_file(args.file.as_str())
        .timeout_secs(args.timeout)
        .create_if_not_exists(args.create_if_not_exists)
        .build();
    run_java(&JavaCommand::ensure_topic(&request, env), settings).await
}
